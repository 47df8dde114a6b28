use log::warn;

use crate::error::DealerError;
use crate::game_card::GameCard;

use super::{Phase, Round};

/// The dealer draws until reaching this total.
pub const DEALER_STAND_TOTAL: u8 = 15;

/// Hard cap on dealer cards. The deck composition should never let the draw
/// loop get here, but the cap forces termination if it does.
pub const DEALER_CARD_CEILING: usize = 10;

impl Round {
    /// Flips the dealer's hole card, assigning its real card and adding its
    /// value to the dealer total. Moves to [`Phase::DealerDrawing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer revealing phase or
    /// the deck is exhausted.
    pub fn reveal_dealer_card(&self) -> Result<Self, DealerError> {
        if self.phase != Phase::DealerRevealing {
            return Err(DealerError::InvalidPhase);
        }
        let Some(hole) = self.dealer_cards.get(1).copied() else {
            return Err(DealerError::InvalidPhase);
        };

        let mut next = self.clone();
        if !hole.is_face_up() {
            let (card, deck) = self.deck.draw().ok_or(DealerError::EmptyDeck)?;
            next.deck = deck;
            next.dealer_cards[1] = hole.flipped_up(card);
            next.dealer_total += card.value();
        }
        next.phase = Phase::DealerDrawing;
        Ok(next)
    }

    /// Whether the dealer must draw another card.
    ///
    /// `false` once the total reaches [`DEALER_STAND_TOTAL`] or the card
    /// count hits [`DEALER_CARD_CEILING`]; hitting the ceiling below the
    /// stand total is logged as an anomaly.
    #[must_use]
    pub fn dealer_draws(&self) -> bool {
        if self.dealer_cards.len() >= DEALER_CARD_CEILING {
            warn!(
                "dealer stopped at the {DEALER_CARD_CEILING}-card ceiling with total {}",
                self.dealer_total
            );
            return false;
        }
        self.dealer_total < DEALER_STAND_TOTAL
    }

    /// Draws one face-up card for the dealer and adds it to the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer drawing phase, the
    /// dealer has reached the card ceiling, or the deck is exhausted.
    pub fn dealer_draw_card(&self) -> Result<Self, DealerError> {
        if self.phase != Phase::DealerDrawing {
            return Err(DealerError::InvalidPhase);
        }
        if self.dealer_cards.len() >= DEALER_CARD_CEILING {
            return Err(DealerError::TooManyCards);
        }

        let (card, deck) = self.deck.draw().ok_or(DealerError::EmptyDeck)?;
        let mut next = self.clone();
        next.deck = deck;
        next.dealer_total += card.value();
        next.dealer_cards.push(GameCard::face_up(card, 0));
        Ok(next)
    }

    /// Ends the draw loop: snapshots the pre-reveal player total as the
    /// starting final total and moves to [`Phase::PlayerRevealing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer drawing phase or
    /// the dealer must still draw.
    pub fn complete_dealer_drawing(&self) -> Result<Self, DealerError> {
        if self.phase != Phase::DealerDrawing {
            return Err(DealerError::InvalidPhase);
        }
        if self.dealer_draws() {
            return Err(DealerError::StillDrawing);
        }

        let mut next = self.clone();
        next.final_player_total = self.player_total;
        next.phase = Phase::PlayerRevealing;
        Ok(next)
    }

    /// Runs the dealer's whole turn at once: hole reveal, draw loop,
    /// completion. Equivalent to composing the discrete steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer revealing phase or
    /// the deck is exhausted mid-loop.
    pub fn run_dealer_turn(&self) -> Result<Self, DealerError> {
        let mut round = self.reveal_dealer_card()?;
        while round.dealer_draws() {
            round = round.dealer_draw_card()?;
        }
        round.complete_dealer_drawing()
    }
}
