//! RNG module - where new pieces come from
//!
//! The game owns a [`PieceSource`] and asks it for one piece per spawn.
//! [`UniformPieces`] draws each kind with equal probability from a seeded
//! xoshiro256** generator, so a seed reproduces a whole game.
//! [`ScriptedPieces`] replays a fixed sequence for tests and demos.

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Independent uniform draws over the seven kinds.
#[derive(Debug, Clone)]
pub struct UniformPieces<R = Xoshiro256StarStar> {
    rng: R,
}

impl UniformPieces {
    /// Seeded xoshiro256** source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> PieceSource for UniformPieces<R> {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    sequence: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieces {
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    pub fn new(sequence: impl IntoIterator<Item = PieceKind>) -> Self {
        let sequence: Vec<PieceKind> = sequence.into_iter().collect();
        assert!(!sequence.is_empty(), "scripted piece sequence is empty");
        Self { sequence, next: 0 }
    }

    /// The same kind forever
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        kind
    }
}

impl<P: PieceSource + ?Sized> PieceSource for Box<P> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}
