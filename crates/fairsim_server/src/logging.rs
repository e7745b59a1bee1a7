use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stdout.
///
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
/// Engine internals stay at `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("fairsim_server={level},fairsim_core=warn,tower_http={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .try_init()?;

    tracing::info!("FAIR simulation API logging initialized (level={level})");
    Ok(())
}
