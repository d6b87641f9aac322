// In: src/logging.rs

//! One-shot `env_logger` setup for binaries and host applications.
//!
//! The library itself only talks to the `log` facade. Whoever embeds it
//! decides whether, and where, those records are written.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::RingcodeError;

static INIT_LOGGER: Once = Once::new();

/// Installs a global logger printing `[LEVEL] message` lines.
///
/// Records go to stderr, or are appended to `log_file` when one is given.
/// Only the first call has any effect; later calls return `Ok(())` untouched.
///
/// # Errors
/// `Io` when `log_file` cannot be opened for appending.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), RingcodeError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let result = init_logging(
            LevelFilter::Info,
            Some(Path::new("/definitely/not/here/ringcode.log")),
        );
        assert!(matches!(result, Err(RingcodeError::Io(_))));
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        assert!(init_logging(LevelFilter::Debug, None).is_ok());
        assert!(init_logging(LevelFilter::Trace, None).is_ok());
        log::debug!("logger initialised twice without panicking");
    }
}
