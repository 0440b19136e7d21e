use thiserror::Error;

/// Errors originating from color parsing and art generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The input does not match `rgb(<int>, <int>, <int>)`.
    #[error("Format RGB invalide : {input}")]
    InvalidFormat {
        /// The original string, unmodified.
        input: String,
    },

    /// The input is not a `#RRGGBB` hex color.
    #[error("Couleur hexadécimale invalide : {input}")]
    InvalidHex {
        /// The original string, unmodified.
        input: String,
    },

    /// An explicit glyph palette with no characters.
    #[error("Palette de caractères vide")]
    EmptyPalette,
}

/// Alias used across the workspace.
pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_message_carries_input() {
        let err = PaletteError::InvalidFormat {
            input: "not-rgb".into(),
        };
        assert!(err.to_string().contains("not-rgb"));
    }
}
