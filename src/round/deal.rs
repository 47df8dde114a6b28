use crate::error::DealError;
use crate::game_card::GameCard;

use super::{Phase, Round};

impl Round {
    /// Executes the next discrete step of the initial dealing sequence.
    ///
    /// Step 0 places the face-down ante card (its real card stays unassigned
    /// until the reveal phase), step 1 draws the dealer's face-up card, and
    /// step 2 places the dealer's face-down hole card. After step 2 the round
    /// moves to [`Phase::PlayerDecisions`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the initial dealing phase or
    /// the deck is exhausted.
    pub fn deal_next(&self) -> Result<Self, DealError> {
        if self.phase != Phase::InitialDealing {
            return Err(DealError::InvalidPhase);
        }

        let mut next = self.clone();
        match self.deal_step {
            0 => {
                next.ante_card = Some(GameCard::face_down(self.ante_bet));
            }
            1 => {
                let (card, deck) = self.deck.draw().ok_or(DealError::EmptyDeck)?;
                next.deck = deck;
                next.dealer_total += card.value();
                next.dealer_cards.push(GameCard::face_up(card, 0));
            }
            _ => {
                next.dealer_cards.push(GameCard::face_down(0));
            }
        }

        next.deal_step = self.deal_step + 1;
        if next.deal_step >= 3 {
            next.phase = Phase::PlayerDecisions;
            next.current_decision = 0;
        }
        Ok(next)
    }

    /// Runs the full three-step dealing sequence at once.
    ///
    /// Equivalent to three [`Round::deal_next`] calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the initial dealing phase or
    /// the deck is exhausted.
    pub fn deal_all(&self) -> Result<Self, DealError> {
        self.deal_next()?.deal_next()?.deal_next()
    }
}
