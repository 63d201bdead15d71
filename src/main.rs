use sigser::config::Config;
use sigser::envelope::codec::{EnvelopeSigner, EnvelopeVerifier};
use sigser::envelope::clock::SystemClock;
use sigser::handlers::{self, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState {
        sealer: EnvelopeSigner::with_clock(config.signer_from_env()?, SystemClock, config.codec),
        opener: EnvelopeVerifier::with_clock(
            config.verifier_from_env()?,
            SystemClock,
            config.codec,
        ),
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        addr = %config.listen_addr,
        max_gap = config.codec.max_gap,
        encoding = %config.codec.encoding,
        "sigser listening"
    );
    axum::serve(listener, handlers::router(state)).await?;
    Ok(())
}
