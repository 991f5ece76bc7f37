use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditBalanceResponse {
    /// None when the provider account shape exposes no recognizable balance.
    pub balance: Option<f64>,
    pub estimated_cost_per_generation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}
