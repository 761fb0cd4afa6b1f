use crate::models::StageDefinition;
use rand::seq::SliceRandom;
use rand::Rng;

/// Produce a uniformly random presentation order of the given stages.
///
/// The input is left untouched; only the order of the returned copy differs.
pub fn shuffle<R: Rng + ?Sized>(catalog: &[StageDefinition], rng: &mut R) -> Vec<StageDefinition> {
    let mut order = catalog.to_vec();
    order.shuffle(rng);
    order
}
