use alloc::string::String;
use alloc::vec::Vec;
use cluegrid_protocol::ClueRecord;
use rand::prelude::*;

use super::*;

/// Builds boards from a catalog, drawing every random choice from one seed so
/// the same seed over the same catalog answers yields the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    async fn generate<S: ClueSource>(self, source: &S, config: BoardConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        build_board(source, &mut rng, config).await
    }
}

/// Asks the catalog for `count` categories at a random offset below
/// `max_offset`, so boards do not cluster around the catalog's default order.
pub async fn select_category_ids<S, R>(
    source: &S,
    rng: &mut R,
    count: u16,
    max_offset: u32,
) -> Result<Vec<Candidate>>
where
    S: ClueSource,
    R: Rng,
{
    let offset = rng.random_range(0..max_offset.max(1));
    log::debug!("requesting {} categories at offset {}", count, offset);
    let records = source.categories(count, offset).await?;
    Ok(records.into_iter().map(Candidate::from).collect())
}

/// Fetches the clues of one candidate and shapes them into a category.
///
/// `Ok(None)` means the candidate had too few clues and was skipped.
pub async fn fetch_category<S, R>(
    source: &S,
    rng: &mut R,
    title: String,
    id: CategoryId,
) -> Result<Option<Category>>
where
    S: ClueSource,
    R: Rng,
{
    let records = source.clues(id).await?;
    let available = records.len();
    match pick_clues(rng, records) {
        Some(clues) => Ok(Category::new(title, clues)),
        None => {
            log::warn!(
                "rejecting category {} ({:?}): {} clues, need {}",
                id,
                title,
                available,
                CLUES_PER_CATEGORY
            );
            Ok(None)
        }
    }
}

/// Drops uniformly random clues until [`CLUES_PER_CATEGORY`] remain, keeping
/// the catalog order of the survivors. Too few clues yield `None`; they are
/// never padded.
pub fn pick_clues<R>(rng: &mut R, mut records: Vec<ClueRecord>) -> Option<Vec<Clue>>
where
    R: Rng,
{
    if records.len() < CLUES_PER_CATEGORY {
        return None;
    }

    while records.len() > CLUES_PER_CATEGORY {
        let index = rng.random_range(0..records.len());
        records.remove(index);
    }

    Some(records.into_iter().map(Clue::from).collect())
}

/// Walks the candidates in order, one fetch at a time, until the board is
/// full. Running out of candidates first is an error rather than a short
/// board.
pub async fn build_board<S, R>(source: &S, rng: &mut R, config: BoardConfig) -> Result<Board>
where
    S: ClueSource,
    R: Rng,
{
    let needed = usize::from(config.categories);
    let candidates =
        select_category_ids(source, rng, config.candidates, config.max_offset).await?;

    let mut categories = Vec::with_capacity(needed);
    for Candidate { id, title } in candidates {
        if categories.len() == needed {
            break;
        }
        if let Some(category) = fetch_category(source, rng, title, id).await? {
            log::debug!("accepted category {} ({:?})", id, category.title());
            categories.push(category);
        }
    }

    let found = categories.len();
    match Board::from_categories(categories, &config) {
        Some(board) => {
            log::info!("board ready with {} categories", found);
            Ok(board)
        }
        None => {
            log::warn!("candidates exhausted with {} of {} categories", found, needed);
            Err(GameError::InsufficientCategories {
                found: found as u8,
                needed: config.categories,
            })
        }
    }
}
