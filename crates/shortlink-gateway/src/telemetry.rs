use crate::cli::LogFormatArg;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info";

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, falling back to `info`.
pub fn init(format: LogFormatArg) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormatArg::Text => builder.try_init(),
        LogFormatArg::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
}
