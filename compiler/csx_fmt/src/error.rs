//! Render errors.
//!
//! Every error here is an integrity failure in the renderer's tables or in
//! the input tree's constants. None of them is recoverable: output already
//! handed to the formatter is final, so the caller must discard it.

/// Failure while rendering a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A node, operator or jump kind with no surface form.
    #[error("unsupported construct: {construct}")]
    Unsupported { construct: String },

    /// An enum constant whose value matches no defined member.
    #[error("value {value} is not a defined member of enum `{enum_name}`")]
    UndefinedEnumValue { enum_name: String, value: i64 },

    /// The render entry was handed something other than a lambda.
    #[error("expected a Lambda node at the render root, found {found}")]
    NotALambda { found: &'static str },
}

impl RenderError {
    pub(crate) fn unsupported(construct: impl Into<String>) -> Self {
        RenderError::Unsupported {
            construct: construct.into(),
        }
    }
}

/// Result alias used throughout the renderer.
pub type RenderResult<T = ()> = Result<T, RenderError>;
