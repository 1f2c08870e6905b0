//! Shuffled card supply.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered, finite, consumable sequence of cards.
///
/// A deck strictly shrinks by one card per deal and is never replenished
/// mid-round.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards not yet dealt. The last element is dealt first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with the given seed.
    ///
    /// The deck contains each (suit, rank) combination exactly once. The
    /// same seed always produces the same order.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a deck with a caller-chosen order.
    ///
    /// The last card in `cards` is dealt first. Useful for tests and
    /// replays that need a known order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptySupply`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptySupply)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
