//! Request and response shapes for the remote endpoints.
//!
//! Field names follow the remote JSON wire format (`camelCase`); optional
//! fields are skipped when absent so requests only carry what the caller set.
//! Response shapes keep unrecognized remote fields in an `extra` map rather
//! than dropping them, since the service adds fields without versioning.

mod inscription;
mod marketplace;
mod runes;

pub use inscription::{
    CollectionSelection, CreateSpecialSatsRequest, CreateSpecialSatsResponse, DirectInscriptionOrder,
    DirectInscriptionOrderRequest, InscriptionCharge, InscriptionCollectionCreateRequest,
    InscriptionCollectionCreateResponse, InscriptionCollectionOrderRequest,
    InscriptionCollectionOrderResponse, InscriptionFile, InscriptionInventoryItem,
    InscriptionOrder, InscriptionOrderRequest, InscriptionPriceRequest,
    InscriptionPriceResponse, InscriptionReferralRequest, InscriptionReferralSetResponse,
    InscriptionReferralStatusResponse, InscriptionTextOrderRequest,
};
pub use marketplace::{
    MarketplaceCheckPaddingOutputRequest, MarketplaceCheckPaddingOutputResponse,
    MarketplaceCreateBuyOfferRequest, MarketplaceCreateBuyOfferResponse,
    MarketplaceCreatePaddingOutputsRequest, MarketplaceCreatePaddingOutputsResponse,
    MarketplaceCreateRequest, MarketplaceCreateResponse, MarketplaceGetListingResponse,
    MarketplaceListOrdinalForSaleRequest, MarketplaceListOrdinalForSaleResponse,
    MarketplaceSellerOrdinal, MarketplaceSubmitBuyOfferRequest,
    MarketplaceSubmitBuyOfferResponse,
};
pub use runes::{
    RunesEtchOrderRequest, RunesEtchOrderResponse, RunesMintOrderRequest,
    RunesMintOrderResponse, RunesTerms,
};
