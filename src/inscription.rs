use std::time::Duration;

use crate::types::{
    CreateSpecialSatsRequest, CreateSpecialSatsResponse, DirectInscriptionOrder,
    DirectInscriptionOrderRequest, InscriptionCollectionCreateRequest,
    InscriptionCollectionCreateResponse, InscriptionCollectionOrderRequest,
    InscriptionCollectionOrderResponse, InscriptionInventoryItem, InscriptionOrder,
    InscriptionOrderRequest, InscriptionPriceRequest, InscriptionPriceResponse,
    InscriptionReferralRequest, InscriptionReferralSetResponse,
    InscriptionReferralStatusResponse, InscriptionTextOrderRequest, RunesEtchOrderRequest,
    RunesEtchOrderResponse, RunesMintOrderRequest, RunesMintOrderResponse,
};
use crate::{ApiError, InscriptionEnv, Transport, form};

/// Per-request deadline applied to every inscription API call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the inscription API.
///
/// One method per remote operation; each issues exactly one HTTP call and
/// resolves to the normalized response payload or an [`ApiError`]. The client
/// holds no mutable state and is safe to share across concurrent calls.
///
/// The client performs no local validation of request values; anything the
/// remote service rejects surfaces as an [`ApiError::Transport`] with the
/// response status attached. Repeated order-creation calls create repeated
/// orders — idempotency is whatever the remote operation provides.
#[derive(Clone, Debug)]
pub struct InscriptionClient {
    env: InscriptionEnv,
    transport: Transport,
}

impl InscriptionClient {
    /// Creates a client for the given environment, authenticating with
    /// `api_key` via the `x-api-key` header. The key may be empty for the
    /// operations that do not require one.
    pub fn new(api_key: &str, env: InscriptionEnv) -> Result<Self, ApiError> {
        Ok(Self {
            env,
            transport: Transport::new(env.base_url(), api_key, Some(REQUEST_TIMEOUT))?,
        })
    }

    /// Creates a client against an explicit base URL, for self-hosted
    /// deployments and tests. The environment is recorded as [`InscriptionEnv::Dev`].
    pub fn with_base_url(api_key: &str, base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        Ok(Self {
            env: InscriptionEnv::Dev,
            transport: Transport::new(base_url, api_key, Some(REQUEST_TIMEOUT))?,
        })
    }

    /// Environment this client was constructed for.
    pub fn env(&self) -> InscriptionEnv {
        self.env
    }

    /// Exposes the underlying transport for direct requests against paths
    /// the typed methods do not cover.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Quotes the price of an inscription. `GET /price`.
    pub async fn get_price(
        &self,
        request: &InscriptionPriceRequest,
    ) -> Result<InscriptionPriceResponse, ApiError> {
        self.transport.get_json_with_query("/price", request).await
    }

    /// Creates an inscription order. `POST /order`.
    pub async fn create_order(
        &self,
        order: &InscriptionOrderRequest,
    ) -> Result<InscriptionOrder, ApiError> {
        self.transport.post_json("/order", order).await
    }

    /// Creates a direct (non-custodial) inscription order. `POST /inscribe`.
    pub async fn create_direct_order(
        &self,
        order: &DirectInscriptionOrderRequest,
    ) -> Result<DirectInscriptionOrder, ApiError> {
        self.transport.post_json("/inscribe", order).await
    }

    /// Retrieves an inscription order by id. `GET /order?id=`.
    pub async fn get_order(&self, id: &str) -> Result<InscriptionOrder, ApiError> {
        self.transport
            .get_json_with_query("/order", &[("id", id)])
            .await
    }

    /// Creates a collection. `POST /collectioncreate`.
    ///
    /// The remote endpoint expects URL-encoded form data with the file list
    /// flattened into `files[<index>][<property>]` fields, so the request is
    /// expanded through [`form`] rather than sent as JSON.
    pub async fn create_collection(
        &self,
        collection: &InscriptionCollectionCreateRequest,
    ) -> Result<InscriptionCollectionCreateResponse, ApiError> {
        let value = serde_json::to_value(collection)?;
        let fields = form::to_indexed_form(&value);
        self.transport.post_form("/collectioncreate", &fields).await
    }

    /// Creates an order against an existing collection. `POST /collectionorder`.
    pub async fn create_collection_order(
        &self,
        order: &InscriptionCollectionOrderRequest,
    ) -> Result<InscriptionCollectionOrderResponse, ApiError> {
        self.transport.post_json("/collectionorder", order).await
    }

    /// Creates a text inscription order. `POST /textorder`.
    pub async fn create_text_order(
        &self,
        order: &InscriptionTextOrderRequest,
    ) -> Result<InscriptionOrder, ApiError> {
        self.transport.post_json("/textorder", order).await
    }

    /// Creates a runes etch order. `POST /runes/etch`.
    pub async fn create_runes_etch_order(
        &self,
        order: &RunesEtchOrderRequest,
    ) -> Result<RunesEtchOrderResponse, ApiError> {
        self.transport.post_json("/runes/etch", order).await
    }

    /// Creates a runes mint order. `POST /runes/mint`.
    pub async fn create_runes_mint_order(
        &self,
        order: &RunesMintOrderRequest,
    ) -> Result<RunesMintOrderResponse, ApiError> {
        self.transport.post_json("/runes/mint", order).await
    }

    /// Lists the rare-sat inventory. `GET /inventory`.
    pub async fn get_inventory(&self) -> Result<Vec<InscriptionInventoryItem>, ApiError> {
        self.transport.get_json("/inventory").await
    }

    /// Registers a referral code. `POST /referrals`.
    pub async fn set_referral_code(
        &self,
        referral: &InscriptionReferralRequest,
    ) -> Result<InscriptionReferralSetResponse, ApiError> {
        self.transport.post_json("/referrals", referral).await
    }

    /// Looks up the status of a referral code. `GET /referrals`.
    pub async fn get_referral_status(
        &self,
        referral: &InscriptionReferralRequest,
    ) -> Result<InscriptionReferralStatusResponse, ApiError> {
        self.transport
            .get_json_with_query("/referrals", referral)
            .await
    }

    /// Builds a PSBT transferring special sats. `POST /create-special-sats-psbt`.
    pub async fn create_special_sats_psbt(
        &self,
        request: &CreateSpecialSatsRequest,
    ) -> Result<CreateSpecialSatsResponse, ApiError> {
        self.transport
            .post_json("/create-special-sats-psbt", request)
            .await
    }
}
