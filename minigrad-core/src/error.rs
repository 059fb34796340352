use thiserror::Error;

/// Error type for the minigrad engine.
///
/// The engine is a pure computation core, so a single kind of failure exists:
/// an operation that is not valid for the values it was given. Everything else
/// (accumulating into a value that does not require gradients, visiting a node
/// that was never seeded, inactive relu/clamp branches) is a silent no-op.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MiniGradError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl MiniGradError {
    /// Returns `true` for [`MiniGradError::InvalidOperation`].
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, MiniGradError::InvalidOperation(_))
    }
}
