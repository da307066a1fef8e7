/// Wire envelope for `createPaymentIntent`: `{ "data": { "amount": ... } }`.
///
/// `amount` stays a raw `serde_json::Value` so that non-numeric payloads
/// reach the validator and fail with `invalid-argument` instead of being
/// rejected at JSON extraction.
#[derive(Debug, serde::Deserialize)]
pub struct CreatePaymentIntentRequest {
    #[serde(default)]
    pub data: PaymentData,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct PaymentData {
    #[serde(default)]
    pub amount: serde_json::Value,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_amount() {
        let req: CreatePaymentIntentRequest =
            serde_json::from_str(r#"{"data":{"amount":1000}}"#).unwrap();
        assert_eq!(req.data.amount, serde_json::json!(1000));
    }

    #[test]
    fn missing_amount_defaults_to_null() {
        let req: CreatePaymentIntentRequest = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(req.data.amount.is_null());

        let req: CreatePaymentIntentRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.data.amount.is_null());
    }

    #[test]
    fn response_uses_camel_case() {
        let response = CreatePaymentIntentResponse {
            client_secret: "secret_abc".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"clientSecret":"secret_abc"}"#
        );
    }
}
