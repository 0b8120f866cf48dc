use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::*;

/// Index type used for both axes of the board.
pub type Index = u8;

/// Identifier of a category in the remote catalog.
pub use cluegrid_protocol::CategoryId;

/// Address of one clue on the board: the category column and the clue row.
///
/// A `CellId` is only a pair of indices; whether it names a clue is decided by
/// the [`Board`] it is used with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    category: Index,
    clue: Index,
}

impl CellId {
    pub const fn new_unchecked(category: Index, clue: Index) -> Self {
        Self { category, clue }
    }

    pub const fn category(self) -> Index {
        self.category
    }

    pub const fn clue(self) -> Index {
        self.clue
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

/// Parses the `"<category>-<clue>"` form used by the rendering surface.
impl FromStr for CellId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let (category, clue) = s.split_once('-').ok_or(GameError::InvalidCell)?;
        let category = category.parse().map_err(|_| GameError::InvalidCell)?;
        let clue = clue.parse().map_err(|_| GameError::InvalidCell)?;
        Ok(Self::new_unchecked(category, clue))
    }
}

/// A category offered by the catalog, before its clues are known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: CategoryId,
    pub title: String,
}

impl From<cluegrid_protocol::CategoryRecord> for Candidate {
    fn from(record: cluegrid_protocol::CategoryRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
        }
    }
}

/// How the rendering surface should present revealed text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StyleHint {
    Default,
    Emphasized,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn cell_id_parses_surface_form() {
        let cell: CellId = "3-4".parse().unwrap();

        assert_eq!(cell, CellId::new_unchecked(3, 4));
        assert_eq!(cell.to_string(), "3-4");
    }

    #[test]
    fn cell_id_rejects_malformed_text() {
        for text in ["", "3", "3-", "-4", "a-1", "1-b", "1-2-3", "300-1", "-1-2"] {
            assert_eq!(text.parse::<CellId>(), Err(GameError::InvalidCell), "{text}");
        }
    }
}
