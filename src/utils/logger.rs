use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// JSON lines, for running under a log collector.
    Json,
}

/// Directives used when `RUST_LOG` is unset.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "web_projects=debug,info"
    } else {
        "web_projects=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber; logs go to stderr so stdout carries only
/// the rendered board.
pub fn init_logger(verbose: bool, format: LogFormat) {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let filter = EnvFilter::try_new(default_directives(verbose)).unwrap();
            assert!(filter.to_string().contains("web_projects="));
        }
        assert!(default_directives(true).contains("debug"));
        assert!(!default_directives(false).contains("debug"));
    }
}
