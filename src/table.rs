//! Collaborator seams for player input and table display.
//!
//! The round engine never touches a console. It pulls raw decision
//! tokens from a [`DecisionSource`] and pushes [`TableEvent`]s into a
//! [`TableSink`]; binding those to stdin/stdout (or anything else) is
//! the caller's job.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::InvalidDecisionToken;
use crate::round::RoundOutcome;

/// Yields one raw decision token per call.
///
/// The call blocks until a token is available; the round waits
/// indefinitely on it.
pub trait DecisionSource {
    /// Returns the next raw token from the player.
    fn next_decision(&mut self) -> String;
}

/// Receives display events as the round progresses.
pub trait TableSink {
    /// Presents one event to the player.
    fn present(&mut self, event: &TableEvent);
}

/// A parsed player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take one more card.
    Hit,
    /// End the turn with the current total.
    Stand,
}

impl FromStr for Decision {
    type Err = InvalidDecisionToken;

    /// Parses a raw token: `"h"` hits and `"s"` stands, after trimming
    /// and ASCII case folding. Only the single-letter forms are valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("s") {
            Ok(Self::Stand)
        } else {
            Err(InvalidDecisionToken)
        }
    }
}

/// A view of both hands at one point in the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The player's cards, fully visible.
    pub player_hand: String,
    /// The player's total.
    pub player_total: u8,
    /// The dealer's cards; the first stays masked until the showdown.
    pub dealer_hand: String,
    /// The dealer's total, `None` while the hole card is masked.
    pub dealer_total: Option<u8>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your hand: {}", self.player_hand)?;
        writeln!(f, "Your total: {}", self.player_total)?;
        write!(f, "Dealer's hand: {}", self.dealer_hand)?;
        if let Some(total) = self.dealer_total {
            write!(f, "\nDealer's total: {total}")?;
        }
        Ok(())
    }
}

/// One display event pushed to the [`TableSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Hand state after a deal, a hit, or the showdown reveal.
    Hands(Snapshot),
    /// The player's total went over 21.
    Bust,
    /// The last decision token was not `"h"` or `"s"`.
    InvalidDecision,
    /// The round outcome.
    Outcome(RoundOutcome),
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hands(snapshot) => snapshot.fmt(f),
            Self::Bust => f.write_str("You bust!"),
            Self::InvalidDecision => f.write_str("Please enter 'h' or 's'."),
            Self::Outcome(RoundOutcome::Win) => f.write_str("You win!"),
            Self::Outcome(RoundOutcome::Lose) => f.write_str("Dealer wins."),
            Self::Outcome(RoundOutcome::Push) => f.write_str("It's a draw."),
        }
    }
}
