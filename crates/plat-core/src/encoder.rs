// crates/plat-core/src/encoder.rs
//
// Deed document encoding.
//
// The query surface turns stored asset metadata into an external-facing JSON
// document wrapped in a base64 data URI, the shape galleries and explorers
// expect. Encoding reads registry state only; no accounting is involved.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::error::PlatError;
use crate::traits::DeedEncoder;

/// The external-facing descriptive document for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeedDocument {
    pub name: String,
    pub description: String,
    pub location: String,
    /// Image reference. Falls back to the asset's display URI when the owner
    /// never set one.
    pub image: String,
    /// The opaque display URI captured at mint.
    pub external_url: String,
}

/// A deed document together with its `data:application/json;base64,` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedDeed {
    pub document: DeedDocument,
    pub uri: String,
}

/// Default encoder: JSON document embedded in a base64 data URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDeedEncoder;

impl DeedEncoder for JsonDeedEncoder {
    fn encode(&self, asset: &Asset) -> Result<EncodedDeed, PlatError> {
        let image = if asset.metadata.image.is_empty() {
            asset.display_uri.clone()
        } else {
            asset.metadata.image.clone()
        };

        let document = DeedDocument {
            name: asset.metadata.name.clone(),
            description: asset.metadata.description.clone(),
            location: asset.metadata.location.clone(),
            image,
            external_url: asset.display_uri.clone(),
        };

        let json = serde_json::to_string(&document)?;
        let uri = format!("data:application/json;base64,{}", BASE64.encode(json.as_bytes()));

        Ok(EncodedDeed { document, uri })
    }
}
