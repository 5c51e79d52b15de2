//! Tracing initialisation
//!
//! Filter comes from `RUST_LOG` (default `csvmeta=info`); `LOG_FORMAT=json`
//! switches to one JSON object per line for log shippers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "csvmeta=info,csvmeta_core=info,csvmeta_infra=info,csvmeta_storage=info,csvmeta_db=info,csvmeta_processing=info";

/// Initialize tracing for csvmeta binaries.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .try_init()?;

    tracing::debug!(json, "Tracing initialized");
    Ok(())
}
