use crate::error::{RevealError, SettleError};
use crate::payout;

use super::{Phase, RevealTarget, Round};

impl Round {
    /// The next hidden card in the fixed reveal order: the ante card first,
    /// then decided positions 0 through 3. `None` once everything is up.
    #[must_use]
    pub fn next_reveal_target(&self) -> Option<RevealTarget> {
        if self.ante_card.is_some_and(|slot| !slot.is_face_up()) {
            return Some(RevealTarget::Ante);
        }
        self.positions.iter().enumerate().find_map(|(index, slot)| {
            slot.as_ref()
                .filter(|card| !card.is_face_up())
                .map(|_| RevealTarget::Position(index))
        })
    }

    /// Flips the next hidden player card, drawing its real card and adding
    /// its value to the final player total. Once nothing is left hidden the
    /// round moves to [`Phase::Payout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player revealing phase,
    /// no hidden card remains, or the deck is exhausted.
    pub fn reveal_next_card(&self) -> Result<Self, RevealError> {
        if self.phase != Phase::PlayerRevealing {
            return Err(RevealError::InvalidPhase);
        }
        let target = self
            .next_reveal_target()
            .ok_or(RevealError::NothingToReveal)?;

        let (card, deck) = self.deck.draw().ok_or(RevealError::EmptyDeck)?;
        let mut next = self.clone();
        next.deck = deck;
        match target {
            RevealTarget::Ante => {
                if let Some(slot) = self.ante_card {
                    next.ante_card = Some(slot.flipped_up(card));
                }
            }
            RevealTarget::Position(index) => {
                if let Some(slot) = self.positions[index] {
                    next.positions[index] = Some(slot.flipped_up(card));
                }
            }
        }
        next.final_player_total += card.value();

        if next.next_reveal_target().is_none() {
            next.phase = Phase::Payout;
        }
        Ok(next)
    }

    /// Reveals every remaining hidden card at once.
    ///
    /// Equivalent to repeating [`Round::reveal_next_card`] until the round
    /// reaches [`Phase::Payout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player revealing phase or
    /// the deck is exhausted mid-loop.
    pub fn reveal_all_cards(&self) -> Result<Self, RevealError> {
        let mut round = self.reveal_next_card()?;
        while round.phase == Phase::PlayerRevealing {
            round = round.reveal_next_card()?;
        }
        Ok(round)
    }

    /// Runs the payout calculator: fixes the final dealer total, the result
    /// category, and the total payout. The round is terminal afterwards; the
    /// caller reads [`Round::settlement`] and may start a new round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached the payout phase or was
    /// already settled.
    pub fn settle(&self) -> Result<Self, SettleError> {
        if self.phase != Phase::Payout {
            return Err(SettleError::InvalidPhase);
        }
        if self.result.is_some() {
            return Err(SettleError::AlreadySettled);
        }

        let (outcome, total_payout) = payout::settle(
            self.final_player_total,
            self.dealer_total,
            self.wager,
            self.ante_card.as_ref(),
            &self.positions,
            self.options.rounding_both_bust,
        );

        let mut next = self.clone();
        next.final_dealer_total = self.dealer_total;
        next.result = Some(outcome);
        next.total_payout = total_payout;
        Ok(next)
    }
}
