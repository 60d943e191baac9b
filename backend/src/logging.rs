use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

/// Installs the process-wide console logger. Call once, first thing in
/// `main`; `RUST_LOG` overrides the default level.
///
/// Lines look like `<time> - <target>[<pid>] - <LEVEL> - <message>` with a
/// colored level.
pub fn init() -> Result<(), SetLoggerError> {
    builder().try_init()
}

fn builder() -> Builder {
    let pid = std::process::id();
    let mut builder = Builder::new();
    builder
        .filter_level(DEFAULT_LEVEL)
        .parse_env("RUST_LOG")
        .format(move |buf, record| {
            let level = buf.default_styled_level(record.level());
            writeln!(
                buf,
                "{} - {}[{}] - {} - {}",
                buf.timestamp_millis(),
                record.target(),
                pid,
                level,
                record.args()
            )
        });
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let _ = init();
        assert!(init().is_err());
    }
}
