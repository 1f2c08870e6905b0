//! Round controller: deals, runs both turns, resolves the winner.

mod dealer;
mod player;
pub mod state;

pub use state::{RoundOutcome, RoundState};

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::table::{DecisionSource, Snapshot, TableEvent, TableSink};

/// A single round of blackjack against the house.
///
/// A round owns its deck and both hands and exists for exactly one pass
/// from dealing to the outcome. It is not reusable: play another round
/// by constructing a new `Round`.
pub struct Round {
    /// The card supply for this round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current position in the round.
    state: RoundState,
}

impl Round {
    /// Creates a round with a fresh 52-card deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pontoon::Round;
    ///
    /// let round = Round::new(42);
    /// let _ = round;
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::shuffled(seed))
    }

    /// Creates a round over a caller-supplied deck.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
        }
    }

    /// Drives the round from its current state to completion and returns
    /// the outcome.
    ///
    /// Decisions are pulled from `input` and display events are pushed to
    /// `sink` as the round progresses. Calling `play` on a finished round
    /// returns the fixed outcome without dealing again.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptySupply`] if the deck runs out of cards.
    /// This is fatal to the round and unreachable with a full deck.
    pub fn play(
        &mut self,
        input: &mut impl DecisionSource,
        sink: &mut impl TableSink,
    ) -> Result<RoundOutcome, DealError> {
        loop {
            match self.state {
                RoundState::Dealing => self.deal(sink)?,
                RoundState::PlayerTurn => self.player_turn(input, sink)?,
                RoundState::DealerTurn => self.dealer_turn()?,
                RoundState::Resolution => self.resolve(sink),
                RoundState::Done(outcome) => return Ok(outcome),
            }
        }
    }

    /// Deals two cards to each hand, strictly alternating player, dealer,
    /// player, dealer, then shows the table with the dealer's first card
    /// masked.
    fn deal(&mut self, sink: &mut impl TableSink) -> Result<(), DealError> {
        for _ in 0..2 {
            let card = self.deck.deal()?;
            self.player.add_card(card);
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
        }

        sink.present(&TableEvent::Hands(self.snapshot(false)));
        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Builds a view of both hands. The dealer's first card and total
    /// stay hidden until `reveal_dealer` is true.
    fn snapshot(&self, reveal_dealer: bool) -> Snapshot {
        Snapshot {
            player_hand: self.player.render(true),
            player_total: self.player.total(),
            dealer_hand: self.dealer.render(reveal_dealer),
            dealer_total: reveal_dealer.then(|| self.dealer.total()),
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome, or `None` while the round is in progress.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
