use flexi_logger::{Logger, LoggerHandle};

use crate::error::Result;

/// Start stderr logging with `spec` as the fallback level filter.
///
/// `RUST_LOG` wins over `spec` when set. Keep the returned handle alive for
/// as long as logging is needed. A second call fails instead of panicking.
pub fn init_logging(spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(spec)?
        .format(flexi_logger::detailed_format)
        .start()?;
    Ok(handle)
}
