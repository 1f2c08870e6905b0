//! Round state types.

/// Outcome of a finished round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player wins (dealer busted or player has the higher total).
    Win,
    /// The dealer wins (player busted or dealer has the higher total).
    Lose,
    /// Both totals are equal.
    Push,
}

/// Round state.
///
/// A round moves forward only: `Dealing` to `PlayerTurn` to `DealerTurn`
/// to `Resolution` to `Done`. A player bust short-circuits from
/// `PlayerTurn` straight to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Comparing totals and announcing the outcome.
    Resolution,
    /// Round has ended with a fixed outcome.
    Done(RoundOutcome),
}
