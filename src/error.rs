//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptySupply,
}

/// A decision token that is neither `"h"` nor `"s"`.
///
/// This error never escapes a round: the player is warned through the
/// table sink and prompted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 'h' or 's'")]
pub struct InvalidDecisionToken;
