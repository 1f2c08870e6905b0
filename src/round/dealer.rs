use crate::error::DealError;
use crate::table::{TableEvent, TableSink};

use super::{Round, RoundOutcome, RoundState};

impl Round {
    /// Plays out the dealer's hand: draw while the total is below 17.
    ///
    /// No I/O happens here. The loop is bounded because every card adds
    /// at least 2 to the total; an exhausted deck is fatal to the round.
    pub(super) fn dealer_turn(&mut self) -> Result<(), DealError> {
        while self.dealer.total() < 17 {
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
        }

        self.state = RoundState::Resolution;
        Ok(())
    }

    /// Reveals both hands and announces the outcome.
    ///
    /// The player's total is at most 21 here; a bust already ended the
    /// round during the player's turn.
    pub(super) fn resolve(&mut self, sink: &mut impl TableSink) {
        sink.present(&TableEvent::Hands(self.snapshot(true)));

        let player = self.player.total();
        let dealer = self.dealer.total();

        let outcome = if dealer > 21 || player > dealer {
            RoundOutcome::Win
        } else if player < dealer {
            RoundOutcome::Lose
        } else {
            RoundOutcome::Push
        };

        sink.present(&TableEvent::Outcome(outcome));
        self.state = RoundState::Done(outcome);
    }
}
