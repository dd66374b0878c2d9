use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::{
    MarketplaceCheckPaddingOutputRequest, MarketplaceCheckPaddingOutputResponse,
    MarketplaceCreateBuyOfferRequest, MarketplaceCreateBuyOfferResponse,
    MarketplaceCreatePaddingOutputsRequest, MarketplaceCreatePaddingOutputsResponse,
    MarketplaceCreateRequest, MarketplaceCreateResponse, MarketplaceGetListingResponse,
    MarketplaceListOrdinalForSaleRequest, MarketplaceListOrdinalForSaleResponse,
    MarketplaceSubmitBuyOfferRequest, MarketplaceSubmitBuyOfferResponse,
};
use crate::{ApiError, Transport};

/// Base URL of the marketplace API. There is no testnet deployment.
pub const MARKETPLACE_BASE_URL: &str = "https://api.ordinalsbot.com/marketplace/";

/// The marketplace endpoints take their request object wrapped under a
/// top-level `params` key.
#[derive(Debug, Serialize)]
struct ParamsEnvelope<'a, T: Serialize> {
    params: &'a T,
}

/// Async client for the marketplace API.
///
/// Same call contract as [`crate::InscriptionClient`]: one HTTP call per
/// method, responses normalized through the shared transport, failures as
/// [`ApiError`]. All POST bodies are wrapped in the `params` envelope the
/// remote service expects.
#[derive(Clone, Debug)]
pub struct MarketplaceClient {
    transport: Transport,
}

impl MarketplaceClient {
    /// Creates a client authenticating with `api_key` via the `x-api-key`
    /// header.
    pub fn new(api_key: &str) -> Result<Self, ApiError> {
        Self::with_base_url(api_key, MARKETPLACE_BASE_URL)
    }

    /// Creates a client against an explicit base URL, for tests.
    pub fn with_base_url(api_key: &str, base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(base_url, api_key, None)?,
        })
    }

    /// Exposes the underlying transport for direct requests.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    async fn post_wrapped<B, T>(&self, path: &str, request: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.transport
            .post_json(path, &ParamsEnvelope { params: request })
            .await
    }

    /// Registers a new marketplace. `POST /create-marketplace`.
    pub async fn create_marketplace(
        &self,
        request: &MarketplaceCreateRequest,
    ) -> Result<MarketplaceCreateResponse, ApiError> {
        self.post_wrapped("/create-marketplace", request).await
    }

    /// Lists an ordinal for sale. `POST /create-listing`.
    pub async fn list_ordinal_for_sale(
        &self,
        request: &MarketplaceListOrdinalForSaleRequest,
    ) -> Result<MarketplaceListOrdinalForSaleResponse, ApiError> {
        self.post_wrapped("/create-listing", request).await
    }

    /// Builds a buy offer PSBT for a listed ordinal. `POST /create-offer`.
    pub async fn create_buy_offer(
        &self,
        request: &MarketplaceCreateBuyOfferRequest,
    ) -> Result<MarketplaceCreateBuyOfferResponse, ApiError> {
        self.post_wrapped("/create-offer", request).await
    }

    /// Submits a signed buy offer for broadcast. `POST /submit-offer`.
    pub async fn submit_buy_offer(
        &self,
        request: &MarketplaceSubmitBuyOfferRequest,
    ) -> Result<MarketplaceSubmitBuyOfferResponse, ApiError> {
        self.post_wrapped("/submit-offer", request).await
    }

    /// Checks whether a buyer address already has padding outputs.
    /// `POST /confirm-padding-outputs`.
    pub async fn check_padding_output(
        &self,
        request: &MarketplaceCheckPaddingOutputRequest,
    ) -> Result<MarketplaceCheckPaddingOutputResponse, ApiError> {
        self.post_wrapped("/confirm-padding-outputs", request).await
    }

    /// Builds a PSBT creating padding outputs for a buyer address.
    /// `POST /setup-padding-outputs`.
    pub async fn create_padding_output(
        &self,
        request: &MarketplaceCreatePaddingOutputsRequest,
    ) -> Result<MarketplaceCreatePaddingOutputsResponse, ApiError> {
        self.post_wrapped("/setup-padding-outputs", request).await
    }

    /// Retrieves the active listings. `GET /get-listing`.
    pub async fn get_listing(&self) -> Result<MarketplaceGetListingResponse, ApiError> {
        self.transport.get_json("/get-listing").await
    }
}

#[cfg(test)]
mod tests {
    use super::{MarketplaceClient, ParamsEnvelope};
    use crate::types::MarketplaceCheckPaddingOutputRequest;
    use serde_json::json;

    #[test]
    fn default_client_targets_marketplace_base() {
        let client = MarketplaceClient::new("key").expect("client builds");
        assert_eq!(
            client.transport().base_url().as_str(),
            "https://api.ordinalsbot.com/marketplace/"
        );
    }

    #[test]
    fn requests_serialize_under_params_key() {
        let request = MarketplaceCheckPaddingOutputRequest {
            address: "bc1q...".to_owned(),
        };
        let value = serde_json::to_value(ParamsEnvelope { params: &request })
            .expect("serializes");
        assert_eq!(value, json!({"params": {"address": "bc1q..."}}));
    }
}
