use tbe::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Default level is Warn, override with RUST_LOG
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
