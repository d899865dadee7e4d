//! Synthetic dataset generation
//!
//! Produces the fixed-size participant collection by independent uniform
//! sampling from the vocabularies in `core::constants::dataset`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::constants::dataset::{
    COLLEGES, DATASET_SIZE, EVENTS, FEEDBACK_PHRASES, MAX_DAY, MIN_DAY, STATES,
};
use crate::core::types::Participant;

/// Generate the full participant collection using the given rng.
///
/// Every field is sampled independently per record; nothing links a college
/// to a state or an event to a day. Ids are sequential starting at 1 and
/// names derive from ids, so the collection is valid by construction.
pub fn generate_dataset<R: Rng>(rng: &mut R) -> Vec<Participant> {
    (1..=DATASET_SIZE as u32)
        .map(|id| Participant {
            id,
            name: format!("Participant_{id}"),
            college: pick(rng, &COLLEGES),
            state: pick(rng, &STATES),
            event: pick(rng, &EVENTS),
            day: rng.gen_range(MIN_DAY..=MAX_DAY),
            feedback: pick(rng, &FEEDBACK_PHRASES),
        })
        .collect()
}

/// Generate the participant collection, seeded or from entropy.
///
/// A seed makes the run reproducible; without one each run differs, matching
/// the behavior users see in the interactive dashboard.
pub fn generate(seed: Option<u64>) -> Vec<Participant> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_dataset(&mut rng)
}

fn pick<R: Rng>(rng: &mut R, vocabulary: &[&str]) -> String {
    vocabulary[rng.gen_range(0..vocabulary.len())].to_string()
}
