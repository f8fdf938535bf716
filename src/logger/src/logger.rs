use log::{Level, LevelFilter};
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use thiserror::Error;

/// Environment variable used to override the command line verbosity, using `env_logger` syntax.
pub const LOG_ENV_VAR: &str = "PUNNETT_LOG";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize the logger: a global logger was already set")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Initialize the global logger.
    ///
    /// Records are printed as `[<timestamp> <LEVEL> <target>] <message>`. Errors are
    /// highlighted and additionally carry the file and line of the call site.
    ///
    /// # Errors
    /// if a global logger has already been set for this process.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let env = Env::default().filter(LOG_ENV_VAR);

        Builder::new().filter_level(Self::u8_to_loglevel(verbosity))
            .format(|buf, record| {
                let is_error  = record.level() == Level::Error;
                let traceback = match is_error {
                    true  => format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)),
                    false => String::new(),
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(is_error);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .try_init()?;
        Ok(())
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_mapping() {
        for level in 0..u8::MAX {
            let expected_level = match level {
                0           => LevelFilter::Error,
                1           => LevelFilter::Warn,
                2           => LevelFilter::Info,
                3           => LevelFilter::Debug,
                4..=u8::MAX => LevelFilter::Trace
            };
            assert_eq!(Logger::u8_to_loglevel(level), expected_level);
        }
    }

    #[test]
    fn init_only_once() {
        // Only one global logger may ever be set.
        let _ = Logger::init(0);
        assert!(matches!(Logger::init(2), Err(LoggerError::AlreadyInitialized(_))));
    }
}
