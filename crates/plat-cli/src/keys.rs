// crates/plat-cli/src/keys.rs
//
// Key-file management under ~/.plat: the registry owner's key plus labeled
// participant keys. Key files hold the hex-encoded ed25519 secret; the
// account id is the public key.

use std::fs;
use std::path::PathBuf;

use plat_core::Keypair;

pub fn plat_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let home = dirs::home_dir().ok_or("Could not determine home directory")?;
    Ok(home.join(".plat"))
}

pub fn keys_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(plat_dir()?.join("keys"))
}

pub fn owner_key_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(plat_dir()?.join("owner.key"))
}

/// Load the registry owner's keypair written by `plat init`.
pub fn load_owner() -> Result<Keypair, Box<dyn std::error::Error>> {
    let path = owner_key_path()?;
    let contents = fs::read_to_string(&path)
        .map_err(|_| format!("no owner key at {}; run `plat init` first", path.display()))?;
    Ok(Keypair::from_hex(contents.trim())?)
}

/// Load a labeled participant keypair created by `plat account new`.
pub fn load_key(label: &str) -> Result<Keypair, Box<dyn std::error::Error>> {
    let path = keys_dir()?.join(format!("{}.key", label));
    let contents = fs::read_to_string(&path).map_err(|_| {
        format!(
            "no key named '{}' at {}; run `plat account new --label {}`",
            label,
            path.display(),
            label
        )
    })?;
    Ok(Keypair::from_hex(contents.trim())?)
}

/// Resolve an account argument: either a 64-character hex account id, or
/// the label of a local key file.
pub fn resolve_account(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    if input.len() == 64 && input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(input.to_lowercase());
    }
    Ok(load_key(input)?.account_id().to_hex())
}
