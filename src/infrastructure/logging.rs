//! File-based logging bootstrap.
//!
//! The terminal belongs to the TUI, so log output goes to rotating files in
//! the working directory instead of stdout/stderr.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "tudu";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts rotating file logging at `info` level, overridable through the
/// standard `RUST_LOG` environment spec.
///
/// The returned handle must be kept alive for the duration of the program;
/// dropping it shuts the logger down and flushes buffered output.
///
/// # Errors
///
/// Returns a human-readable error string when the log specification is
/// invalid or the backing file cannot be opened. Logging is best-effort:
/// callers are expected to run without it rather than abort.
pub fn init_logging() -> Result<LoggerHandle, String> {
    Logger::try_with_env_or_str("info")
        .map_err(|err| format!("invalid log specification: {}", err))?
        .log_to_file(
            FileSpec::default()
                .basename(LOG_FILE_BASENAME)
                .suppress_timestamp(),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .map_err(|err| format!("failed to start logger: {}", err))
}
