//! Error types for script rendering

/// Failure while rendering an editor extension
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("command '{ui_name}' does not implement render_ui")]
    NotImplemented { ui_name: String },

    #[error("failed to serialize script value: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("template '{template}' has no value for slot '{slot}'")]
    UnresolvedSlot { template: String, slot: String },

    #[error("template '{template}' is malformed: {reason}")]
    MalformedTemplate { template: String, reason: String },

    #[error("invalid editor handle '{0}': expected a JavaScript identifier")]
    InvalidEditorHandle(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
