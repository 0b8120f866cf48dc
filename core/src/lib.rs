#![no_std]

extern crate alloc;

use alloc::string::String;

pub use board::*;
pub use clue::*;
pub use error::*;
pub use generator::*;
pub use source::*;
pub use types::*;

mod board;
mod clue;
mod error;
mod generator;
mod source;
mod types;

/// Number of clues every category on a board carries.
pub const CLUES_PER_CATEGORY: usize = 5;

/// Number of categories on a standard board.
pub const BOARD_CATEGORIES: usize = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Categories requested from the catalog. Many get rejected, so this is
    /// well above `categories`.
    pub candidates: u16,
    /// Categories a finished board holds.
    pub categories: u8,
    /// Exclusive upper bound for the random catalog offset.
    pub max_offset: u32,
}

impl BoardConfig {
    pub const fn new_unchecked(candidates: u16, categories: u8, max_offset: u32) -> Self {
        Self {
            candidates,
            categories,
            max_offset,
        }
    }

    pub fn new(candidates: u16, categories: u8, max_offset: u32) -> Self {
        let categories = categories.max(1);
        let candidates = candidates.max(categories.into());
        let max_offset = max_offset.max(1);
        Self::new_unchecked(candidates, categories, max_offset)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(18, BOARD_CATEGORIES as u8, 20_000)
    }
}

/// Render instruction produced by a single reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion(String),
    ShowAnswer(String),
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub fn text(&self) -> Option<&str> {
        use RevealOutcome::*;
        match self {
            NoChange => None,
            ShowQuestion(text) | ShowAnswer(text) => Some(text),
        }
    }

    pub const fn style(&self) -> Option<StyleHint> {
        use RevealOutcome::*;
        match self {
            NoChange => None,
            ShowQuestion(_) => Some(StyleHint::Default),
            ShowAnswer(_) => Some(StyleHint::Emphasized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_to_usable_values() {
        assert_eq!(BoardConfig::new(0, 0, 0), BoardConfig::new_unchecked(1, 1, 1));
        assert_eq!(BoardConfig::new(3, 6, 10), BoardConfig::new_unchecked(6, 6, 10));
        assert_eq!(
            BoardConfig::default(),
            BoardConfig::new_unchecked(18, 6, 20_000)
        );
    }

    #[test]
    fn no_change_carries_nothing_to_render() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert_eq!(RevealOutcome::NoChange.text(), None);
        assert_eq!(RevealOutcome::NoChange.style(), None);
    }
}
