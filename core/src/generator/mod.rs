use crate::*;
pub use random::*;

mod random;

#[allow(async_fn_in_trait)]
pub trait BoardGenerator {
    async fn generate<S: ClueSource>(self, source: &S, config: BoardConfig) -> Result<Board>;
}
