use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::dtos::{CreatePaymentIntentRequest, CreatePaymentIntentResponse};
use crate::error::ApiError;
use crate::processor::PaymentProcessor;

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<dyn PaymentProcessor>,
}

/// `POST /createPaymentIntent`: validates the amount, creates one payment
/// intent through the processor, and returns its client secret.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, ApiError> {
    tracing::info!(amount = %request.data.amount, "payment intent requested");

    let amount = parse_amount(&request.data.amount)
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| {
            tracing::error!(amount = %request.data.amount, "invalid amount");
            ApiError::InvalidArgument("Amount must be a valid number.".to_string())
        })?;

    // Stripe takes integer smallest-currency-unit amounts.
    let intent = state
        .processor
        .create_payment_intent(amount.round() as i64)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "payment intent creation failed");
            ApiError::Internal(err.to_string())
        })?;

    tracing::info!(intent_id = %intent.id, "payment intent created");

    Ok(Json(CreatePaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// Converts the raw JSON value to a number the way the callers expect:
/// JSON numbers pass through, numeric strings are parsed, everything else
/// is not a number.
fn parse_amount(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
