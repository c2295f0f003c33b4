//! Thought phrases and the random source that picks among them.
//!
//! Phrase choice goes through [`PhraseSource`] so tests can script the
//! exact sequence of picks instead of asserting "one of the set".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Initial thought of a fresh pet.
pub const GREETING: &str = "Hi there! 👋";

/// After eating, when hunger ends below 20.
pub const FEED_SATED: &str = "Yum yum! Delicious 😋";
/// After eating, otherwise.
pub const FEED_THANKS: &str = "Mmm... thank you 😊";

/// Sleep refused, energy too high.
pub const NOT_SLEEPY: &str = "I'm not sleepy 😴";
/// After sleeping.
pub const SLEEPING: &str = "Zzzzzzz... 💤";

/// Play refused, too hungry.
pub const TOO_HUNGRY_TO_PLAY: &str = "I'm hungry, I can't play 😞";
/// Play refused, too tired.
pub const TOO_TIRED_TO_PLAY: &str = "I'm so tired 😫";

/// After playing.
pub const PLAYING: &[&str] = &["This is fun! 🎮", "Wheeee! 🤩", "More, more! 😻", "Ha ha! 😄"];

/// Idle thoughts when hunger is high.
pub const HUNGRY: &[&str] = &["I'm hungry! 🍖", "I'd love something to eat 😋", "Empty tummy 🤤"];
/// Idle thoughts when energy is low.
pub const TIRED: &[&str] = &["I'm tired 😴", "I need a rest 😫", "Zzzzz... 💤"];
/// Idle thoughts when happiness is high.
pub const HAPPY: &[&str] = &["I'm so happy! 😻", "Life is beautiful! 🌈", "I love this! 💕"];
/// Idle thoughts when happiness is low.
pub const SAD: &[&str] = &[
    "I feel lonely 😞",
    "I want to play with you 🥺",
    "Are you ignoring me? 😿",
];
/// Idle thoughts otherwise.
pub const NEUTRAL: &[&str] = &[
    "Hello 👋",
    "How's it going? 😊",
    "I love you 💕",
    "What are you doing? 👀",
];

/// Source of uniform picks among `len` candidates.
pub trait PhraseSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: PhraseSource + ?Sized> PhraseSource for Box<P> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Choose one phrase from `phrases` using `source`.
///
/// Out-of-range picks from a misbehaving source are reduced modulo the list
/// length.
#[must_use]
pub fn choose(source: &mut dyn PhraseSource, phrases: &[&'static str]) -> &'static str {
    match phrases.len() {
        0 => "",
        len => phrases[source.pick(len) % len],
    }
}

/// Uniform random picks backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct RandomPhrases {
    rng: StdRng,
}

impl RandomPhrases {
    /// Seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPhrases {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PhraseSource for RandomPhrases {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedPhrases {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPhrases {
    /// Replay `script` in order. An empty script always picks 0.
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }
}

impl PhraseSource for ScriptedPhrases {
    fn pick(&mut self, _len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.cursor % self.script.len()];
        self.cursor = self.cursor.wrapping_add(1);
        index
    }
}
