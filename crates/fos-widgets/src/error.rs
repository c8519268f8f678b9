//! Widget errors

use fos_dom::DomError;

/// Widget error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// Missing or malformed markup at construction time
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Dom(#[from] DomError),
}

impl WidgetError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result alias for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
