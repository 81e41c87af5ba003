use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Unknown preference field: {0:?}")]
    UnknownField(String),

    #[error("Malformed override {0:?}, expected field=value")]
    MalformedOverride(String),
}

impl ParamsError {
    pub(crate) fn unknown_option(field: &'static str, value: &str) -> Self {
        ParamsError::UnknownOption {
            field,
            value: value.to_string(),
        }
    }
}

pub type ParamsResult<T> = Result<T, ParamsError>;
