//! Randomized presentation of the choice set.
//!
//! The [`Shuffler`] trait is the only randomness seam in the bot: the
//! dispatcher asks it for the select-menu order and for the emoji in the
//! confirmation message. Production uses [`RandomShuffler`]; tests pin a
//! seed or use [`FixedOrder`].

use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::choices::{Choice, ChoiceOption};

const EMOJIS: [&str; 14] = [
    "😭", "😄", "😌", "🤓", "😎", "😤", "🤖", "😶‍🌫️", "🌏", "📸", "💿", "👋", "🌊", "✨",
];

pub trait Shuffler: Send + Sync {
    /// Reorder `options` in place.
    fn shuffle(&self, options: &mut [ChoiceOption]);

    /// Pick an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Every choice exactly once, in the order the shuffler decides.
pub fn shuffled_options(shuffler: &dyn Shuffler) -> Vec<ChoiceOption> {
    let mut options: Vec<ChoiceOption> = Choice::ALL.into_iter().map(ChoiceOption::from).collect();
    shuffler.shuffle(&mut options);
    options
}

pub fn random_emoji(shuffler: &dyn Shuffler) -> &'static str {
    let idx = shuffler.pick_index(EMOJIS.len());
    EMOJIS[idx.min(EMOJIS.len() - 1)]
}

/// Uniform shuffler over a ChaCha stream.
pub struct RandomShuffler {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomShuffler {
    /// `Some(seed)` gives a reproducible sequence; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&self, options: &mut [ChoiceOption]) {
        options.shuffle(&mut *self.rng.lock());
    }

    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.lock().random_range(0..len)
    }
}

/// Leaves options in declaration order and always picks the first item.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedOrder;

impl Shuffler for FixedOrder {
    fn shuffle(&self, _options: &mut [ChoiceOption]) {}

    fn pick_index(&self, _len: usize) -> usize {
        0
    }
}
