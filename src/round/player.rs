use crate::error::DealError;
use crate::table::{Decision, DecisionSource, TableEvent, TableSink};

use super::{Round, RoundOutcome, RoundState};

impl Round {
    /// Runs the player's turn.
    ///
    /// Tokens are pulled from `input` until one parses as a decision; an
    /// unrecognized token is reported to `sink` and re-prompted without
    /// advancing the round. A hit deals one card and shows the table
    /// (dealer still masked); going over 21 announces the bust and ends
    /// the round in the dealer's favor, skipping the dealer's turn. A
    /// stand hands play to the dealer.
    pub(super) fn player_turn(
        &mut self,
        input: &mut impl DecisionSource,
        sink: &mut impl TableSink,
    ) -> Result<(), DealError> {
        loop {
            let token = input.next_decision();
            let Ok(decision) = token.parse::<Decision>() else {
                sink.present(&TableEvent::InvalidDecision);
                continue;
            };

            match decision {
                Decision::Hit => {
                    let card = self.deck.deal()?;
                    self.player.add_card(card);
                    sink.present(&TableEvent::Hands(self.snapshot(false)));

                    if self.player.is_bust() {
                        sink.present(&TableEvent::Bust);
                        self.state = RoundState::Done(RoundOutcome::Lose);
                        return Ok(());
                    }
                }
                Decision::Stand => {
                    self.state = RoundState::DealerTurn;
                    return Ok(());
                }
            }
        }
    }
}
