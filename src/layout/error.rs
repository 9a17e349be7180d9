use thiserror::Error;

/// Failures surfaced at the boundary of a layout strategy call.
///
/// Strategies validate before touching any rectangle, so a caller that
/// receives an error can rely on its slice being untouched.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout input: {0}")]
    InvalidInput(String),
}

impl LayoutError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LayoutError::InvalidInput(msg.into())
    }
}
