use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// A titled column of exactly [`CLUES_PER_CATEGORY`] clues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Returns `None` unless exactly [`CLUES_PER_CATEGORY`] clues are given.
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Option<Self> {
        (clues.len() == CLUES_PER_CATEGORY).then(|| Self {
            title: title.into(),
            clues,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Complete game state for one play session.
///
/// The board owns every clue; the rendering surface refers to them only
/// through [`CellId`]s, which are checked here before use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Returns `None` unless there are exactly as many categories as `config`
    /// asks for.
    pub fn from_categories(categories: Vec<Category>, config: &BoardConfig) -> Option<Self> {
        (categories.len() == usize::from(config.categories)).then(|| Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether every clue has reached its answer.
    pub fn is_complete(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.clues.iter())
            .all(|clue| clue.state().is_terminal())
    }

    pub fn cell(&self, category: Index, clue: Index) -> Result<CellId> {
        self.validate_cell(CellId::new_unchecked(category, clue))
    }

    pub fn validate_cell(&self, cell: CellId) -> Result<CellId> {
        let category = self
            .categories
            .get(usize::from(cell.category()))
            .ok_or(GameError::InvalidCell)?;
        if usize::from(cell.clue()) < category.clues.len() {
            Ok(cell)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn clue_at(&self, cell: CellId) -> Result<&Clue> {
        let cell = self.validate_cell(cell)?;
        Ok(&self.categories[usize::from(cell.category())].clues[usize::from(cell.clue())])
    }

    /// Advances the addressed clue one step and reports what to show.
    pub fn reveal(&mut self, cell: CellId) -> Result<RevealOutcome> {
        let cell = self.validate_cell(cell)?;
        let clue =
            &mut self.categories[usize::from(cell.category())].clues[usize::from(cell.clue())];
        let outcome = clue.reveal();
        log::trace!("reveal {}: {:?}", cell, clue.state());
        Ok(outcome)
    }

    /// All cells of the board, category-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(category_index, category)| {
                (0..category.clues.len()).map(move |clue_index| {
                    CellId::new_unchecked(category_index as Index, clue_index as Index)
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn category(title: &str) -> Category {
        let clues = (0..CLUES_PER_CATEGORY)
            .map(|i| Clue::new(format!("{title} q{i}"), format!("{title} a{i}")))
            .collect();
        Category::new(title, clues).unwrap()
    }

    fn board() -> Board {
        let categories = (0..BOARD_CATEGORIES).map(|i| category(&format!("c{i}"))).collect();
        Board::from_categories(categories, &BoardConfig::default()).unwrap()
    }

    #[test]
    fn category_requires_exact_clue_count() {
        let short = (0..3).map(|_| Clue::new("q", "a")).collect();
        let long = (0..6).map(|_| Clue::new("q", "a")).collect();

        assert_eq!(Category::new("short", short), None);
        assert_eq!(Category::new("long", long), None);
        assert_eq!(category("ok").clues().len(), CLUES_PER_CATEGORY);
    }

    #[test]
    fn board_requires_configured_category_count() {
        let config = BoardConfig::default();
        let five = (0..5).map(|i| category(&format!("c{i}"))).collect();
        let seven = (0..7).map(|i| category(&format!("c{i}"))).collect();

        assert_eq!(Board::from_categories(Vec::new(), &config), None);
        assert_eq!(Board::from_categories(five, &config), None);
        assert_eq!(Board::from_categories(seven, &config), None);
        assert_eq!(board().categories().len(), BOARD_CATEGORIES);
    }

    #[test]
    fn reveal_only_touches_addressed_clue() {
        let mut board = board();
        let cell = board.cell(2, 3).unwrap();

        let outcome = board.reveal(cell).unwrap();

        assert_eq!(outcome, RevealOutcome::ShowQuestion("c2 q3".into()));
        for other in board.iter_cells().filter(|&other| other != cell) {
            assert_eq!(board.clue_at(other).unwrap().state(), RevealState::Hidden);
        }
    }

    #[test]
    fn reveal_scenario_question_answer_noop() {
        let clues = (0..CLUES_PER_CATEGORY).map(|_| Clue::new("2+2", "4")).collect();
        let config = BoardConfig::new(1, 1, 1);
        let mut board =
            Board::from_categories(alloc::vec![Category::new("math", clues).unwrap()], &config)
                .unwrap();
        let cell = board.cell(0, 0).unwrap();

        let first = board.reveal(cell).unwrap();
        assert_eq!(first.text(), Some("2+2"));
        assert_eq!(first.style(), Some(StyleHint::Default));

        let second = board.reveal(cell).unwrap();
        assert_eq!(second.text(), Some("4"));
        assert_eq!(second.style(), Some(StyleHint::Emphasized));

        let third = board.reveal(cell).unwrap();
        assert_eq!(third, RevealOutcome::NoChange);
        assert!(!third.has_update());
        assert_eq!(board.clue_at(cell).unwrap().state(), RevealState::Answer);
    }

    #[test]
    fn out_of_range_cells_are_rejected() {
        let mut board = board();

        assert_eq!(board.cell(6, 0), Err(GameError::InvalidCell));
        assert_eq!(board.cell(0, 5), Err(GameError::InvalidCell));
        assert_eq!(
            board.reveal(CellId::new_unchecked(9, 9)),
            Err(GameError::InvalidCell)
        );
        assert_eq!(
            board.clue_at(CellId::new_unchecked(0, 200)).err(),
            Some(GameError::InvalidCell)
        );
    }

    #[test]
    fn parsed_cell_is_checked_against_board() {
        let mut board = board();
        let cell: CellId = "5-4".parse().unwrap();
        let outside: CellId = "6-0".parse().unwrap();

        assert!(board.reveal(cell).unwrap().has_update());
        assert_eq!(board.reveal(outside), Err(GameError::InvalidCell));
    }

    #[test]
    fn board_completes_when_every_answer_is_shown() {
        let mut board = board();
        let cells: Vec<_> = board.iter_cells().collect();
        assert_eq!(cells.len(), BOARD_CATEGORIES * CLUES_PER_CATEGORY);

        for &cell in &cells {
            board.reveal(cell).unwrap();
        }
        assert!(!board.is_complete());

        for &cell in &cells {
            board.reveal(cell).unwrap();
        }
        assert!(board.is_complete());
    }
}
