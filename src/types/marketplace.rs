use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body for `POST /marketplace/create-marketplace`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCreateRequest {
    pub name: String,
    /// Seller-side fee in basis points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_fee: Option<u64>,
    /// Buyer-side fee in basis points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_fee: Option<u64>,
    /// Address marketplace fees are paid out to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btc_fee_payout_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of `POST /marketplace/create-marketplace`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCreateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    /// API key scoped to the created marketplace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One ordinal offered for sale, with its asking price in sats.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceSellerOrdinal {
    pub id: String,
    pub price: u64,
}

/// Body for `POST /marketplace/create-listing`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListOrdinalForSaleRequest {
    pub seller_ordinals: Vec<MarketplaceSellerOrdinal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_payment_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_ordinal_public_key: Option<String>,
}

/// Response of `POST /marketplace/create-listing`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListOrdinalForSaleResponse {
    /// Base64-encoded PSBT the seller signs to list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psbt: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /marketplace/create-offer`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCreateBuyOfferRequest {
    pub ordinal_id: String,
    pub buyer_payment_address: String,
    pub buyer_ordinal_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_payment_public_key: Option<String>,
}

/// Response of `POST /marketplace/create-offer`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCreateBuyOfferResponse {
    /// Base64-encoded PSBT the buyer signs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psbt: Option<String>,
    /// Input indices the buyer must sign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_input_indices: Option<Vec<u32>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /marketplace/submit-offer`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceSubmitBuyOfferRequest {
    pub ordinal_id: String,
    /// Buyer-signed PSBT from the create-offer step.
    #[serde(rename = "signedBuyerPSBT")]
    pub signed_buyer_psbt: String,
}

/// Response of `POST /marketplace/submit-offer`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceSubmitBuyOfferResponse {
    /// Transaction id of the broadcast sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /marketplace/confirm-padding-outputs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCheckPaddingOutputRequest {
    pub address: String,
}

/// Response of `POST /marketplace/confirm-padding-outputs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCheckPaddingOutputResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_outputs_exist: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /marketplace/setup-padding-outputs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCreatePaddingOutputsRequest {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_of_outs: Option<u32>,
    /// Fee rate in sat/vB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<u64>,
}

/// Response of `POST /marketplace/setup-padding-outputs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCreatePaddingOutputsResponse {
    /// Base64-encoded PSBT creating the padding outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psbt: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /marketplace/get-listing`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceGetListingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinals: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
