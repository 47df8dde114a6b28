use crate::error::DecisionError;
use crate::game_card::GameCard;

use super::{Choice, POSITION_COUNT, Phase, Round};

impl Round {
    /// Fills the current position with a face-up or face-down card.
    ///
    /// Either choice deducts one ante-sized bet from the balance and adds it
    /// to the wager. A face-up choice draws its card immediately and counts
    /// it toward the running total; a face-down choice creates a hidden slot
    /// whose value only enters the total at reveal time. After the fourth
    /// decision the round moves to [`Phase::DealerRevealing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player decision phase,
    /// the balance cannot cover the bet, or the deck is exhausted.
    pub fn decide(&self, choice: Choice) -> Result<Self, DecisionError> {
        if self.phase != Phase::PlayerDecisions
            || self.current_decision as usize >= POSITION_COUNT
        {
            return Err(DecisionError::InvalidPhase);
        }
        if self.balance < self.ante_bet {
            return Err(DecisionError::InsufficientFunds);
        }

        let position = self.current_decision as usize;
        let mut next = self.clone();

        match choice {
            Choice::FaceUp => {
                let (card, deck) = self.deck.draw().ok_or(DecisionError::EmptyDeck)?;
                next.deck = deck;
                next.player_total += card.value();
                next.positions[position] = Some(GameCard::face_up(card, self.ante_bet));
            }
            Choice::FaceDown => {
                next.positions[position] = Some(GameCard::face_down(self.ante_bet));
            }
        }

        next.balance = self.balance - self.ante_bet;
        next.wager = self.wager + self.ante_bet;
        next.current_decision = self.current_decision + 1;
        if next.current_decision as usize >= POSITION_COUNT {
            next.phase = Phase::DealerRevealing;
        }
        Ok(next)
    }

    /// Stops deciding early and hands the turn to the dealer.
    ///
    /// Undecided positions stay empty; they never join the wager or payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player decision phase.
    pub fn stand(&self) -> Result<Self, DecisionError> {
        if self.phase != Phase::PlayerDecisions {
            return Err(DecisionError::InvalidPhase);
        }

        let mut next = self.clone();
        next.phase = Phase::DealerRevealing;
        Ok(next)
    }
}
