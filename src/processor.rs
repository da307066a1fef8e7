use std::sync::Arc;

use async_trait::async_trait;
use stripe::{Client, CreatePaymentIntent, Currency, PaymentIntent};
use thiserror::Error;

/// Error raised by the payment processor, carrying its message text.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProcessorError(pub String);

/// A created payment intent, reduced to the two fields this service uses.
#[derive(Debug, Clone)]
pub struct CreatedPaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Outbound seam to the payment processor. The production implementation
/// talks to Stripe; tests substitute a mock.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Creates a payment intent for `amount` in the smallest currency unit.
    /// Called exactly once per invocation, with no retry.
    async fn create_payment_intent(
        &self,
        amount: i64,
    ) -> Result<CreatedPaymentIntent, ProcessorError>;
}

/// Stripe-backed processor. Holds the client constructed once at startup and
/// the single configured currency; every intent is card-only.
pub struct StripeProcessor {
    client: Arc<Client>,
    currency: Currency,
}

impl StripeProcessor {
    pub fn new(client: Arc<Client>, currency: Currency) -> Self {
        Self { client, currency }
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn create_payment_intent(
        &self,
        amount: i64,
    ) -> Result<CreatedPaymentIntent, ProcessorError> {
        let mut params = CreatePaymentIntent::new(amount, self.currency);
        params.payment_method_types = Some(vec!["card".to_string()]);

        let intent = PaymentIntent::create(&self.client, params)
            .await
            .map_err(|err| ProcessorError(err.to_string()))?;

        let client_secret = intent
            .client_secret
            .ok_or_else(|| ProcessorError("payment intent has no client secret".to_string()))?;

        Ok(CreatedPaymentIntent {
            id: intent.id.to_string(),
            client_secret,
        })
    }
}
