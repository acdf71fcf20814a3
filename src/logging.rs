use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";
const DEBUG_DIRECTIVE: &str = "pixel_lens=debug,info";

/// Pick the filter directive: the `debug_logging` setting, then `RUST_LOG`, then warnings only.
fn filter_directive(enable_debug: bool, rust_log: Option<&str>) -> String {
    if enable_debug {
        return DEBUG_DIRECTIVE.to_string();
    }
    match rust_log.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Install the global subscriber and route `log` records through it.
/// A second call leaves the first subscriber in place.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(enable_debug, rust_log.as_deref());
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {directive:?}: {e}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(enable_debug)
        .with_thread_names(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_setting_overrides_environment() {
        assert_eq!(filter_directive(true, Some("error")), DEBUG_DIRECTIVE);
    }

    #[test]
    fn test_environment_then_default() {
        assert_eq!(filter_directive(false, Some("pixel_lens=trace")), "pixel_lens=trace");
        assert_eq!(filter_directive(false, Some("   ")), DEFAULT_DIRECTIVE);
        assert_eq!(filter_directive(false, None), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("still logging after a second init");
    }
}
