use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while declaring routes or navigating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route name `{0}` is declared more than once")]
    DuplicateRouteName(String),

    #[error("route `{route}` can never match, `{by}` is declared earlier and covers it")]
    ShadowedRoute { route: String, by: String },

    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` needs a value for `:{param}`")]
    MissingParam { route: String, param: String },

    #[error("failed to load component for route `{route}`: {reason}")]
    ComponentLoad { route: String, reason: String },
}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<RouterError> for JsValue {
    fn from(err: RouterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Why a deferred component could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LoadError(pub String);

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        LoadError(reason.into())
    }
}

impl From<JsValue> for LoadError {
    fn from(value: JsValue) -> Self {
        LoadError(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
