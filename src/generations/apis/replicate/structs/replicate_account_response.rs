use serde::Deserialize;
use serde_json::Value;

/// Replicate has shipped the prepaid balance under several field names, so
/// everything beyond the stable fields is kept as raw json and probed in
/// order.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplicateAccountResponse {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    #[serde(flatten)]
    pub extra: Value,
}

impl ReplicateAccountResponse {
    pub fn balance(&self) -> Option<f64> {
        let candidates = [
            self.extra.pointer("/billing/prepaid_balance"),
            self.extra.get("prepaid_balance"),
            self.extra.get("credit_balance"),
            self.extra.get("credits"),
            self.extra.get("balance"),
        ];

        candidates
            .into_iter()
            .find_map(|value| value.and_then(|value| value.as_f64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nested_prepaid_balance_first() {
        let account: ReplicateAccountResponse = serde_json::from_str(
            r#"{
                "username": "acme",
                "type": "organization",
                "billing": { "prepaid_balance": 12.5 },
                "balance": 99.0
            }"#,
        )
        .unwrap();

        assert_eq!(account.balance(), Some(12.5));
        assert_eq!(account.username.as_deref(), Some("acme"));
        assert_eq!(account.account_type.as_deref(), Some("organization"));
    }

    #[test]
    fn falls_back_through_known_field_names() {
        let account: ReplicateAccountResponse =
            serde_json::from_str(r#"{ "username": "acme", "credits": 3.0 }"#).unwrap();

        assert_eq!(account.balance(), Some(3.0));
    }

    #[test]
    fn unknown_shape_yields_none() {
        let account: ReplicateAccountResponse =
            serde_json::from_str(r#"{ "username": "acme" }"#).unwrap();

        assert_eq!(account.balance(), None);
    }
}
