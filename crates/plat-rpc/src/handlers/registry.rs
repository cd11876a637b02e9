// crates/plat-rpc/src/handlers/registry.rs
//
// Registry handlers: Mint, UpdateMetadata, GetAsset, ListAssets, Document,
// Events. Mutations take the ledger write lock; queries take the read lock.

use serde::{Deserialize, Serialize};

use plat_core::{AccountId, Asset, AssetId, AssetMetadata, DeedDocument, DeedEncoder, EventRecord, PlatError, Units};
use plat_ledger::PropertyLedger;

use crate::SharedLedger;

/// Default number of journal entries served when the caller does not say.
const DEFAULT_EVENT_LIMIT: usize = 50;

// ---------------------------------------------------------------------------
// Shared DTOs
// ---------------------------------------------------------------------------

/// Full view of one asset, including its live fraction accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetView {
    pub asset_id: AssetId,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Image reference; empty when the owner never set one.
    pub image: String,
    /// Opaque display reference captured at mint.
    pub display_uri: String,
    pub total_supply: Units,
    /// Units still held by the registry.
    pub unsold: Units,
    /// Distinct holders with a nonzero balance.
    pub holders: usize,
    /// Mint time, RFC 3339.
    pub created_at: String,
}

fn view(ledger: &PropertyLedger, asset: &Asset) -> Result<AssetView, PlatError> {
    Ok(AssetView {
        asset_id: asset.id,
        name: asset.metadata.name.clone(),
        description: asset.metadata.description.clone(),
        location: asset.metadata.location.clone(),
        image: asset.metadata.image.clone(),
        display_uri: asset.display_uri.clone(),
        total_supply: asset.total_supply,
        unsold: ledger.unsold_units(asset.id)?,
        holders: ledger.holder_count(asset.id)?,
        created_at: asset.created_at.to_rfc3339(),
    })
}

// ---------------------------------------------------------------------------
// Mint
// ---------------------------------------------------------------------------

/// Request to mint a new asset. Owner-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintRequest {
    /// Hex-encoded account id of the caller.
    pub caller: String,
    /// Short human-readable name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Physical location.
    pub location: String,
    /// Optional image reference.
    #[serde(default)]
    pub image: String,
    /// Opaque display reference for the asset (e.g. a gallery URL).
    pub display_uri: String,
    /// Fraction units to create. Fixed for the life of the asset.
    pub total_supply: Units,
}

/// Response from minting an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintResponse {
    /// The sequential id assigned to the new asset.
    pub asset_id: AssetId,
    pub total_supply: Units,
}

/// Handle a Mint request.
pub async fn handle_mint(
    ledger: &SharedLedger,
    request: MintRequest,
) -> Result<MintResponse, PlatError> {
    let caller = AccountId::from_hex(&request.caller)?;
    let metadata = AssetMetadata {
        name: request.name,
        description: request.description,
        location: request.location,
        image: request.image,
    };

    let mut ledger = ledger.write().await;
    let asset_id = ledger.mint(&caller, metadata, request.display_uri, request.total_supply)?;
    tracing::info!(asset_id, total_supply = request.total_supply, "minted asset");

    Ok(MintResponse {
        asset_id,
        total_supply: request.total_supply,
    })
}

// ---------------------------------------------------------------------------
// UpdateMetadata
// ---------------------------------------------------------------------------

/// Request to replace an asset's descriptive metadata. Owner-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMetadataRequest {
    /// Hex-encoded account id of the caller.
    pub caller: String,
    pub asset_id: AssetId,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub image: String,
}

/// Handle an UpdateMetadata request. Returns the refreshed asset view.
pub async fn handle_update_metadata(
    ledger: &SharedLedger,
    request: UpdateMetadataRequest,
) -> Result<AssetView, PlatError> {
    let caller = AccountId::from_hex(&request.caller)?;
    let metadata = AssetMetadata {
        name: request.name,
        description: request.description,
        location: request.location,
        image: request.image,
    };

    let mut ledger = ledger.write().await;
    ledger.set_metadata(&caller, request.asset_id, metadata)?;
    view(&ledger, ledger.asset(request.asset_id)?)
}

// ---------------------------------------------------------------------------
// GetAsset
// ---------------------------------------------------------------------------

/// Request for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAssetRequest {
    pub asset_id: AssetId,
}

/// Response containing one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAssetResponse {
    pub asset: AssetView,
}

/// Handle a GetAsset request.
pub async fn handle_get_asset(
    ledger: &SharedLedger,
    request: GetAssetRequest,
) -> Result<GetAssetResponse, PlatError> {
    let ledger = ledger.read().await;
    let asset = ledger.asset(request.asset_id)?;
    Ok(GetAssetResponse {
        asset: view(&ledger, asset)?,
    })
}

// ---------------------------------------------------------------------------
// ListAssets
// ---------------------------------------------------------------------------

/// Request to list all assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAssetsRequest {}

/// One row of the asset listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSummary {
    pub asset_id: AssetId,
    pub name: String,
    pub location: String,
    pub total_supply: Units,
    pub unsold: Units,
    pub holders: usize,
}

/// Response listing every asset in id order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAssetsResponse {
    pub assets: Vec<AssetSummary>,
    pub total: u64,
}

/// Handle a ListAssets request.
pub async fn handle_list_assets(
    ledger: &SharedLedger,
    _request: ListAssetsRequest,
) -> Result<ListAssetsResponse, PlatError> {
    let ledger = ledger.read().await;
    let mut assets = Vec::new();
    for asset in ledger.assets() {
        assets.push(AssetSummary {
            asset_id: asset.id,
            name: asset.metadata.name.clone(),
            location: asset.metadata.location.clone(),
            total_supply: asset.total_supply,
            unsold: ledger.unsold_units(asset.id)?,
            holders: ledger.holder_count(asset.id)?,
        });
    }

    Ok(ListAssetsResponse {
        total: ledger.asset_count(),
        assets,
    })
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// Request for an asset's deed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub asset_id: AssetId,
}

/// Response carrying the deed document and its data URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub asset_id: AssetId,
    pub document: DeedDocument,
    /// `data:application/json;base64,` form of the document.
    pub uri: String,
}

/// Handle a Document request.
pub async fn handle_document(
    ledger: &SharedLedger,
    encoder: &dyn DeedEncoder,
    request: DocumentRequest,
) -> Result<DocumentResponse, PlatError> {
    let ledger = ledger.read().await;
    let asset = ledger.asset(request.asset_id)?;
    let deed = encoder.encode(asset)?;

    Ok(DocumentResponse {
        asset_id: asset.id,
        document: deed.document,
        uri: deed.uri,
    })
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Request for the tail of the ledger journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsRequest {
    /// Maximum entries to return, newest last. Defaults to 50.
    pub limit: Option<usize>,
}

/// Response carrying journal entries, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventRecord>,
    /// Total entries in the journal, independent of `limit`.
    pub total: u64,
}

/// Handle an Events request.
pub async fn handle_events(
    ledger: &SharedLedger,
    request: EventsRequest,
) -> Result<EventsResponse, PlatError> {
    let limit = request.limit.unwrap_or(DEFAULT_EVENT_LIMIT);
    let ledger = ledger.read().await;

    Ok(EventsResponse {
        events: ledger.events(limit).to_vec(),
        total: ledger.event_count(),
    })
}
