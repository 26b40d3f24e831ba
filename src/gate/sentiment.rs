//! Emoji sentiment policy: allow-list plus detection pattern.
//!
//! The policy is immutable configuration data injected into the evaluator,
//! so tests can substitute a smaller fixture set without touching the
//! production list.

use std::collections::BTreeSet;

use regex::Regex;

use crate::github::error::GateError;

/// Emoji glyphs treated as positive sentiment.
///
/// This is a simplified list; extend it as team vocabulary evolves.
const POSITIVE_EMOJIS: [&str; 59] = [
    "😀", "😃", "😄", "😁", "😆", "😊", "🙂", "🙃", "😉", "😌", "😍", "🥰", "😘", "😗", "😙",
    "😚", "😋", "😛", "😝", "😜", "🤪", "🤗", "🤩", "🥳", "👍", "👏", "🙌", "🤝", "🎉", "🎊",
    "🎈", "🎁", "🎯", "🏆", "🥇", "🥂", "✅", "✨", "⭐", "🌟", "💯", "💪", "👌", "🤙", "🔥",
    "❤️", "🧡", "💛", "💚", "💙", "💜", "🖤", "💕", "💞", "💓", "💗", "💖", "💘", "💝",
];

/// Pattern matching any glyph in the covered Unicode emoji blocks.
const EMOJI_PATTERN: &str = "[\\u{1F600}-\\u{1F64F}\\u{1F300}-\\u{1F5FF}\\u{1F680}-\\u{1F6FF}\
\\u{1F700}-\\u{1F77F}\\u{1F780}-\\u{1F7FF}\\u{1F800}-\\u{1F8FF}\\u{1F900}-\\u{1F9FF}\
\\u{1FA00}-\\u{1FA6F}\\u{2600}-\\u{26FF}\\u{2700}-\\u{27BF}]";

const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Immutable allow-list of positive emoji plus the detector used to extract
/// candidate glyphs from a title.
#[derive(Debug, Clone)]
pub struct SentimentPolicy {
    positive: BTreeSet<String>,
    detector: Regex,
}

impl SentimentPolicy {
    /// Creates a policy from an allow-list and a detector pattern.
    ///
    /// Allow-list entries are stored with U+FE0F presentation selectors
    /// stripped; the detector extracts bare code points, so `❤️` must match
    /// as `❤`.
    #[must_use]
    pub fn new(positive: impl IntoIterator<Item = impl AsRef<str>>, detector: Regex) -> Self {
        let stripped = positive
            .into_iter()
            .map(|glyph| strip_presentation(glyph.as_ref()))
            .collect();
        Self {
            positive: stripped,
            detector,
        }
    }

    /// Builds the production policy from the built-in allow-list and emoji
    /// block pattern.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Configuration`] if the detector pattern fails to
    /// compile.
    pub fn builtin() -> Result<Self, GateError> {
        let detector = Regex::new(EMOJI_PATTERN).map_err(|error| GateError::Configuration {
            message: format!("emoji detector pattern failed to compile: {error}"),
        })?;
        Ok(Self::new(POSITIVE_EMOJIS, detector))
    }

    /// Returns true when the title contains at least one emoji from the
    /// allow-list.
    ///
    /// Extraction happens first: glyphs outside the detector's Unicode blocks
    /// are never considered, even if they appear in the allow-list.
    #[must_use]
    pub fn qualifies(&self, title: &str) -> bool {
        self.detector
            .find_iter(title)
            .any(|glyph| self.positive.contains(glyph.as_str()))
    }
}

fn strip_presentation(glyph: &str) -> String {
    glyph
        .chars()
        .filter(|ch| *ch != VARIATION_SELECTOR_16)
        .collect()
}
