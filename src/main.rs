use std::sync::Arc;

use axum::{routing::post, Router};
use dotenvy::dotenv;
use stripe::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dtos;
mod error;
mod handlers;
mod processor;

use config::AppConfig;
use handlers::AppState;
use processor::StripeProcessor;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payment_intents=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    // One Stripe client per process, shared across invocations.
    let stripe_client = Arc::new(Client::new(&config.stripe_secret_key));
    let processor = Arc::new(StripeProcessor::new(stripe_client, config.currency));

    let app_state = AppState { processor };

    let app = Router::new()
        .route("/createPaymentIntent", post(handlers::create_payment_intent))
        .with_state(app_state);

    tracing::debug!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
