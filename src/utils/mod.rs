use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "retail_core=warn";

/// Initializes the global tracing subscriber. Logs go to stderr so receipts on
/// stdout stay clean. Later calls are no-ops.
pub fn init_tracing() {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = fmt()
        .with_env_filter(env_filter(raw.as_deref()))
        .with_writer(std::io::stderr)
        .try_init();
}

/// `RUST_LOG` wins when it is set and parses; otherwise only warnings from
/// this crate are shown.
fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(raw: Option<&str>) -> String {
        env_filter(raw).to_string().to_lowercase()
    }

    #[test]
    fn defaults_to_crate_warnings() {
        assert_eq!(shown(None), DEFAULT_FILTER);
        assert_eq!(shown(Some("  ")), DEFAULT_FILTER);
    }

    #[test]
    fn operator_directives_are_kept() {
        assert_eq!(shown(Some("retail_core=debug")), "retail_core=debug");
        assert_eq!(shown(Some("debug")), "debug");
    }

    #[test]
    fn unparsable_directives_fall_back() {
        assert_eq!(shown(Some("retail_core=loud")), DEFAULT_FILTER);
    }
}
