//! A single-round blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that drives one full round of
//! blackjack: the deal, the player's turn, the dealer's draw-to-17, and
//! the showdown. Console I/O stays outside the engine behind the
//! [`DecisionSource`] and [`TableSink`] traits.
//!
//! # Example
//!
//! ```
//! use pontoon::{DecisionSource, Round, TableEvent, TableSink};
//!
//! struct AlwaysStand;
//!
//! impl DecisionSource for AlwaysStand {
//!     fn next_decision(&mut self) -> String {
//!         "s".into()
//!     }
//! }
//!
//! struct Silent;
//!
//! impl TableSink for Silent {
//!     fn present(&mut self, _event: &TableEvent) {}
//! }
//!
//! let mut round = Round::new(42);
//! let outcome = round.play(&mut AlwaysStand, &mut Silent)?;
//! println!("{outcome:?}");
//! # Ok::<(), pontoon::DealError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod round;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, InvalidDecisionToken};
pub use hand::{HIDDEN_CARD, Hand};
pub use round::{Round, RoundOutcome, RoundState};
pub use table::{Decision, DecisionSource, Snapshot, TableEvent, TableSink};
