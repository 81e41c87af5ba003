//! Start-up configuration read from the environment

use article_params_core::ArticleState;
use std::env::VarError;
use tracing::{info, warn};

/// Environment variable with `field=value` pairs for the initially applied params
pub const PARAMS_ENV: &str = "ARTICLE_PARAMS";

#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    pub initial_params: ArticleState,
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(PARAMS_ENV))
    }

    fn from_var(var: Result<String, VarError>) -> Self {
        match var {
            Ok(overrides) => Self::from_overrides(&overrides),
            Err(VarError::NotPresent) => Self::default(),
            Err(e) => {
                warn!("Ignoring {}: {}", PARAMS_ENV, e);
                Self::default()
            }
        }
    }

    /// Build from an override list, skipping invalid entries
    pub fn from_overrides(overrides: &str) -> Self {
        let (initial_params, errors) = ArticleState::default().with_overrides(overrides);
        for error in &errors {
            warn!("Ignoring {} entry: {}", PARAMS_ENV, error);
        }
        info!("Initial article params: {:?}", initial_params);
        Self { initial_params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_params_core::{FontSize, Swatch};

    #[test]
    fn test_from_overrides_skips_invalid_entries() {
        let config =
            ViewerConfig::from_overrides("font-size=25px,font-color=mauve,background-color=gray");
        assert_eq!(config.initial_params.font_size, FontSize::Medium);
        assert_eq!(config.initial_params.font_color, Swatch::Black);
        assert_eq!(config.initial_params.background_color, Swatch::Gray);
    }

    #[test]
    fn test_unreadable_variable_falls_back_to_defaults() {
        let not_unicode = VarError::NotUnicode(std::ffi::OsString::from("\u{fffd}"));
        let config = ViewerConfig::from_var(Err(not_unicode));
        assert_eq!(config.initial_params, ArticleState::default());

        let config = ViewerConfig::from_var(Err(VarError::NotPresent));
        assert_eq!(config.initial_params, ArticleState::default());

        let config = ViewerConfig::from_var(Ok("font-size=38px".to_string()));
        assert_eq!(config.initial_params.font_size, FontSize::Large);
    }
}
