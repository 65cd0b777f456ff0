//! RNG module - random piece supply with a fixed lookahead
//!
//! Each draw is independent and uniform over the seven kinds (with
//! replacement, no bag fairness). The queue always holds [`LOOKAHEAD`]
//! upcoming pieces; taking the front one immediately backfills the back slot.
//!
//! The generator is injected, so tests can use a seeded `StdRng` or a mock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Piece;
use crate::types::{PieceKind, LOOKAHEAD};

/// Infinite piece supply with a lookahead buffer
#[derive(Debug, Clone)]
pub struct PieceQueue<R = StdRng> {
    /// Upcoming pieces, front first
    next: [Piece; LOOKAHEAD],
    rng: R,
}

impl PieceQueue<StdRng> {
    /// Create a queue backed by a `StdRng` seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceQueue<R> {
    /// Create a queue drawing from the given generator
    pub fn with_rng(mut rng: R) -> Self {
        let next = std::array::from_fn(|_| Self::random_piece(&mut rng));
        Self { next, rng }
    }

    fn random_piece(rng: &mut R) -> Piece {
        let idx = rng.gen_range(0..PieceKind::ALL.len());
        Piece::new(PieceKind::ALL[idx])
    }

    /// Upcoming pieces without consuming them
    pub fn peek(&self) -> &[Piece; LOOKAHEAD] {
        &self.next
    }

    /// Kinds of the upcoming pieces, front first
    pub fn next_kinds(&self) -> [PieceKind; LOOKAHEAD] {
        self.next.map(|piece| piece.kind())
    }

    /// Take the front piece, shift the buffer forward and refill the back slot.
    ///
    /// The returned piece is an independent value at its spawn state.
    pub fn get_and_update(&mut self) -> Piece {
        let mut front = self.next[0];
        self.next.rotate_left(1);
        self.next[LOOKAHEAD - 1] = Self::random_piece(&mut self.rng);
        front.reset();
        front
    }
}

impl Default for PieceQueue<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
