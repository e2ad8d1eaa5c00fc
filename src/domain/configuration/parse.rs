//! Pure parse/validate for `chuzapath.toml`.

use crate::domain::{AppError, ChuzapathConfig};

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ChuzapathConfig, AppError> {
    let config: ChuzapathConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
