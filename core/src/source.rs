use alloc::vec::Vec;
use cluegrid_protocol::{CategoryRecord, ClueRecord};

use crate::*;

/// Read-only access to the remote trivia catalog.
///
/// Implementations map every transport or decoding failure to
/// [`GameError::Transport`]. The futures are not required to be `Send`: the
/// board is built on a single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait ClueSource {
    /// Lists up to `count` categories starting at `offset` in catalog order.
    async fn categories(&self, count: u16, offset: u32) -> Result<Vec<CategoryRecord>>;

    /// Lists every clue filed under `id`.
    async fn clues(&self, id: CategoryId) -> Result<Vec<ClueRecord>>;
}
