//! Text direction inference.

use serde::{Deserialize, Serialize};

/// Writing direction of marquee content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
    /// No strong direction, use the surrounding context.
    #[default]
    Inherit,
}

impl TextDirection {
    /// Infers the direction of `text`.
    ///
    /// Any right-to-left script character wins. Otherwise any alphabetic
    /// character makes the text left to right.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if text.chars().any(is_rtl_char) {
            Self::Rtl
        } else if text.chars().any(char::is_alphabetic) {
            Self::Ltr
        } else {
            Self::Inherit
        }
    }

    /// Resolves the direction, letting `forced` override inference.
    #[must_use]
    pub fn resolve(text: &str, forced: Option<Self>) -> Self {
        match forced {
            Some(direction) if direction != Self::Inherit => direction,
            _ => Self::infer(text),
        }
    }

    /// Returns the sign of the scroll offset: LTR content moves left.
    #[must_use]
    pub const fn scroll_sign(self) -> f32 {
        match self {
            Self::Rtl => 1.0,
            Self::Ltr | Self::Inherit => -1.0,
        }
    }
}

/// Returns true for characters of right-to-left scripts.
#[must_use]
pub fn is_rtl_char(c: char) -> bool {
    matches!(
        c,
        // Hebrew
        '\u{0590}'..='\u{05FF}'
        // Arabic, Syriac, Arabic Supplement, Thaana, NKo, Samaritan, Mandaic
        | '\u{0600}'..='\u{085F}'
        // Arabic Extended-A/B
        | '\u{0870}'..='\u{08FF}'
        // Hebrew and Arabic presentation forms
        | '\u{FB1D}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}'
    )
}
