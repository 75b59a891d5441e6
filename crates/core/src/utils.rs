use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_forest::ForestLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber filtered by `RUST_LOG` (off by default).
///
/// Safe to call any number of times; only the first call has an effect.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::OFF.into())
            .from_env_lossy();
        let _ = Registry::default().with(env_filter).with(ForestLayer::default()).try_init();
    });
}
