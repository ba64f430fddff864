//! Logger setup for hosts and tools embedding the registries
//!
//! The crate itself only emits through `log`. Hosts that already install a
//! logger can skip this entirely.

/// Install an `env_logger` with `filter` (e.g. `"info"`,
/// `"hearth_customs=debug"`). `RUST_LOG` overrides it when set.
///
/// Returns false if a logger was already installed.
pub fn init_logging(filter: &str) -> bool {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filter);
    if let Ok(env_filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&env_filter);
    }

    match builder.try_init() {
        Ok(()) => {
            log::info!("[logging::init_logging] Logger initialized with filter '{}'", filter);
            true
        }
        Err(_) => false,
    }
}
