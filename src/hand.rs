//! Hand representation and scoring.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;

/// Mask token shown in place of a hidden card.
pub const HIDDEN_CARD: &str = "?";

/// An ordered collection of cards held by one participant.
///
/// Cards keep their deal order, which matters for display: the dealer's
/// first-dealt card stays hidden until the showdown.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the total value of the hand.
    ///
    /// The total is the plain sum of card values, recomputed on every
    /// call. Every ace counts as 11 unconditionally; the hand is never
    /// softened to keep it under 21, so a two-ace hand totals 22.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.cards
            .iter()
            .fold(0, |total, card| total.saturating_add(card.value()))
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Renders the hand as a comma-separated list of cards.
    ///
    /// When `reveal_all` is false the first-dealt card is replaced with
    /// [`HIDDEN_CARD`]; the remaining cards stay visible.
    #[must_use]
    pub fn render(&self, reveal_all: bool) -> String {
        let mut labels: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        if !reveal_all {
            if let Some(first) = labels.first_mut() {
                *first = String::from(HIDDEN_CARD);
            }
        }
        labels.join(", ")
    }
}
