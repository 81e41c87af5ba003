//! The flat preferences record handed from the params form to the article view

use crate::error::{ParamsError, ParamsResult};
use crate::options::{ContentWidth, FontFamily, FontSize, ParamOption, Swatch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Display preferences for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArticleState {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: Swatch,
    pub background_color: Swatch,
    pub content_width: ContentWidth,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            font_family: FontFamily::OpenSans,
            font_size: FontSize::Small,
            font_color: Swatch::Black,
            background_color: Swatch::White,
            content_width: ContentWidth::Wide,
        }
    }
}

/// Names of the fields of [`ArticleState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ParamField {
    pub const ALL: [ParamField; 5] = [
        ParamField::FontFamily,
        ParamField::FontSize,
        ParamField::FontColor,
        ParamField::BackgroundColor,
        ParamField::ContentWidth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParamField::FontFamily => "font-family",
            ParamField::FontSize => "font-size",
            ParamField::FontColor => "font-color",
            ParamField::BackgroundColor => "background-color",
            ParamField::ContentWidth => "content-width",
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamField {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParamsError::UnknownField(s.to_string()))
    }
}

impl ArticleState {
    /// Parse `raw` as an option of `field` and store it.
    ///
    /// The record is left untouched when `raw` is not one of the field's options.
    pub fn set(&mut self, field: ParamField, raw: &str) -> ParamsResult<()> {
        let name = field.name();
        match field {
            ParamField::FontFamily => self.font_family = FontFamily::parse_for(name, raw)?,
            ParamField::FontSize => self.font_size = FontSize::parse_for(name, raw)?,
            ParamField::FontColor => self.font_color = Swatch::parse_for(name, raw)?,
            ParamField::BackgroundColor => {
                self.background_color = Swatch::parse_for(name, raw)?
            }
            ParamField::ContentWidth => {
                self.content_width = ContentWidth::parse_for(name, raw)?
            }
        }
        Ok(())
    }

    /// Apply comma-separated `field=value` pairs on top of this record.
    ///
    /// Valid pairs are applied even when others fail; every failure is returned.
    pub fn with_overrides(mut self, overrides: &str) -> (Self, Vec<ParamsError>) {
        let mut errors = Vec::new();

        for pair in overrides.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((key, value)) = pair.split_once('=') else {
                errors.push(ParamsError::MalformedOverride(pair.to_string()));
                continue;
            };

            let value = value.trim();
            let result = key
                .parse::<ParamField>()
                .and_then(|field| self.set(field, value).map(|()| field));
            match result {
                Ok(field) => debug!("Override {} = {}", field, value),
                Err(e) => errors.push(e),
            }
        }

        (self, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let state = ArticleState::default();
        assert_eq!(state.font_family, FontFamily::ALL[0]);
        assert_eq!(state.font_size, FontSize::ALL[0]);
        assert_eq!(state.font_color, crate::FONT_COLORS[0]);
        assert_eq!(state.background_color, crate::BACKGROUND_COLORS[0]);
        assert_eq!(state.content_width, ContentWidth::ALL[0]);
    }

    #[test]
    fn test_set_field() {
        let mut state = ArticleState::default();
        state.set(ParamField::BackgroundColor, "violet").unwrap();
        state.set(ParamField::FontSize, "38px").unwrap();
        assert_eq!(state.background_color, Swatch::Violet);
        assert_eq!(state.font_size, FontSize::Large);
        assert_eq!(state.font_color, Swatch::Black);
    }

    #[test]
    fn test_set_unknown_value_leaves_record_unchanged() {
        let mut state = ArticleState::default();
        let err = state.set(ParamField::FontColor, "teal").unwrap_err();
        assert_eq!(
            err,
            ParamsError::UnknownOption {
                field: "font-color",
                value: "teal".to_string(),
            }
        );
        assert_eq!(state, ArticleState::default());
    }

    #[test]
    fn test_overrides_collect_every_error() {
        let (state, errors) = ArticleState::default()
            .with_overrides("font-family=Merriweather, width=wide,content-width=narrow,oops");

        assert_eq!(state.font_family, FontFamily::Merriweather);
        assert_eq!(state.content_width, ContentWidth::Narrow);
        assert_eq!(
            errors,
            vec![
                ParamsError::UnknownField("width".to_string()),
                ParamsError::MalformedOverride("oops".to_string()),
            ]
        );
    }

    #[test]
    fn test_override_errors_report_trimmed_value() {
        let (_, errors) = ArticleState::default().with_overrides("font-color= mauve ");
        assert_eq!(
            errors,
            vec![ParamsError::UnknownOption {
                field: "font-color",
                value: "mauve".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_overrides() {
        let (state, errors) = ArticleState::default().with_overrides("  ");
        assert_eq!(state, ArticleState::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ArticleState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "font-family": "open-sans",
                "font-size": "18px",
                "font-color": "black",
                "background-color": "white",
                "content-width": "wide",
            })
        );
    }

    #[test]
    fn test_deserialize_from_option_values() {
        let json = serde_json::json!({
            "font-family": "cormorant-garamond",
            "font-size": "38px",
            "font-color": "hot-pink",
            "background-color": "sky-blue",
            "content-width": "narrow",
        });
        let state: ArticleState = serde_json::from_value(json).unwrap();
        assert_eq!(
            state,
            ArticleState {
                font_family: FontFamily::CormorantGaramond,
                font_size: FontSize::Large,
                font_color: Swatch::HotPink,
                background_color: Swatch::SkyBlue,
                content_width: ContentWidth::Narrow,
            }
        );

        let back: ArticleState =
            serde_json::from_value(serde_json::to_value(state).unwrap()).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_rejects_unknown_option() {
        let json = serde_json::json!({
            "font-family": "open-sans",
            "font-size": "20px",
            "font-color": "black",
            "background-color": "white",
            "content-width": "wide",
        });
        assert!(serde_json::from_value::<ArticleState>(json).is_err());
    }
}
