use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::inscription::{InscriptionCharge, InscriptionFile};

/// Open-mint terms of a rune etching.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunesTerms {
    /// Amount of the rune minted per mint transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Maximum number of mints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap: Option<u64>,
}

/// Body for `POST /runes/etch`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunesEtchOrderRequest {
    /// Spaced rune name, e.g. `UNCOMMON•GOODS`.
    pub rune: String,
    pub supply: u64,
    /// Fee rate in sat/vB.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisibility: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premine: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<RunesTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbo: Option<bool>,
    /// Optional inscription to attach to the etching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<InscriptionFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_address: Option<String>,
}

/// A runes etch order as the service reports it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunesEtchOrderResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rune: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<InscriptionCharge>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /runes/mint`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunesMintOrderRequest {
    /// Spaced rune name to mint.
    pub rune: String,
    /// How many mint transactions to submit.
    pub number_of_mints: u32,
    /// Fee rate in sat/vB.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
}

/// A runes mint order as the service reports it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunesMintOrderResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rune: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<InscriptionCharge>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::{RunesEtchOrderRequest, RunesTerms};
    use serde_json::json;

    #[test]
    fn etch_request_serializes_nested_terms() {
        let request = RunesEtchOrderRequest {
            rune: "UNCOMMON•GOODS".to_owned(),
            supply: 21_000_000,
            fee: 10,
            divisibility: Some(2),
            terms: Some(RunesTerms {
                amount: Some(100),
                cap: Some(210_000),
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).expect("serializes");
        assert_eq!(
            value,
            json!({
                "rune": "UNCOMMON•GOODS",
                "supply": 21_000_000,
                "fee": 10,
                "divisibility": 2,
                "terms": {"amount": 100, "cap": 210_000},
            })
        );
    }
}
