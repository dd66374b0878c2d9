use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One file to inscribe, passed by data URL or fetchable URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionFile {
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// MIME content type, e.g. `image/png`.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Base64 data URL with the file contents.
    #[serde(rename = "dataURL", skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    /// Remote URL the service fetches the file from instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Query parameters for `GET /price`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionPriceRequest {
    /// Total size of all files in bytes.
    pub size: u64,
    /// Fee rate in sat/vB.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rare_sats: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_postage: Option<bool>,
    /// Quote for a direct (non-custodial) inscription instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fee: Option<u64>,
}

/// Fee breakdown returned by `GET /price`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionPriceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rare_sats_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postage: Option<u64>,
    /// Total amount due in sats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /order`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionOrderRequest {
    pub files: Vec<InscriptionFile>,
    /// Fee rate in sat/vB.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_postage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rare_sats: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_tag: Option<String>,
}

/// Payment charge attached to a created order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Amount due in sats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightning_invoice: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An inscription order as the service reports it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionOrder {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<InscriptionCharge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /inscribe` (direct, non-custodial order).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectInscriptionOrderRequest {
    pub files: Vec<InscriptionFile>,
    /// Fee rate in sat/vB.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_postage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fee: Option<u64>,
}

/// A direct inscription order as the service reports it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectInscriptionOrder {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<InscriptionCharge>,
    /// Address the caller funds directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /collectioncreate`.
///
/// Submitted as URL-encoded form data with the file list flattened into
/// bracket-indexed fields; see [`crate::InscriptionClient::create_collection`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionCollectionCreateRequest {
    pub files: Vec<InscriptionFile>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Price per item in sats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

/// Response of `POST /collectioncreate`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionCollectionCreateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /collectionorder`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionCollectionOrderRequest {
    /// Collection id plus how many items to inscribe.
    pub collection: CollectionSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
}

/// Identifies a collection and the item count for a collection order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSelection {
    pub id: String,
    pub count: u32,
}

/// Collection orders come back in the same shape as plain orders.
pub type InscriptionCollectionOrderResponse = InscriptionOrder;

/// Body for `POST /textorder`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionTextOrderRequest {
    /// One inscription per entry.
    pub texts: Vec<String>,
    /// Fee rate in sat/vB.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_postage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
}

/// One entry of the `GET /inventory` listing of rare-sat stock.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionInventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_sat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /referrals` and query for `GET /referrals`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionReferralRequest {
    pub referral: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Response of `POST /referrals`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionReferralSetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /referrals`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionReferralStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /create-special-sats-psbt`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecialSatsRequest {
    /// Amount to charge in sats.
    pub charge_amount: String,
    pub funding_address: String,
    pub user_address: String,
    /// Outpoint carrying the special sats.
    pub special_sats_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<u64>,
}

/// Response of `POST /create-special-sats-psbt`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecialSatsResponse {
    /// Base64-encoded PSBT for the caller to sign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psbt: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
