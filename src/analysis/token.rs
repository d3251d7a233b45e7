//! Token representation.

/// A single token produced by analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The normalized term text.
    pub text: String,

    /// 0-based position of the token within the analyzed field.
    pub position: u32,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: u32) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}
