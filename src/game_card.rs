//! Betting slots pairing a wager with a possibly hidden card.

use alloc::string::{String, ToString};

use crate::card::Card;

/// Identifier reported for a card that has not been revealed.
pub const HIDDEN_ID: &str = "face-down";

/// Image path shown for any card back.
pub const FACE_DOWN_ASSET: &str = "cards/face-down.JPG";

/// A dealt table slot: a bet plus a card that may still be hidden.
///
/// `was_face_down` is fixed when the slot is created and keys the payout
/// multiplier. A later reveal flips `is_face_up` but never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameCard {
    /// The underlying card, absent until the slot is revealed.
    card: Option<Card>,
    /// Whether the card currently shows its face.
    face_up: bool,
    /// Whether the slot was created hidden.
    was_face_down: bool,
    /// Bet amount attached to this slot.
    bet: usize,
}

impl GameCard {
    /// Creates a hidden slot. The real card is only assigned at reveal time.
    #[must_use]
    pub const fn face_down(bet: usize) -> Self {
        Self {
            card: None,
            face_up: false,
            was_face_down: true,
            bet,
        }
    }

    /// Creates a revealed slot with its card already drawn.
    #[must_use]
    pub const fn face_up(card: Card, bet: usize) -> Self {
        Self {
            card: Some(card),
            face_up: true,
            was_face_down: false,
            bet,
        }
    }

    /// Returns the underlying card, if revealed.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        self.card
    }

    /// Returns whether the card currently shows its face.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Returns whether the slot was created hidden.
    #[must_use]
    pub const fn was_face_down(&self) -> bool {
        self.was_face_down
    }

    /// Returns the bet amount attached to this slot.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Point value contributed to the currently visible total.
    ///
    /// A hidden slot contributes 0 until it is revealed.
    #[must_use]
    pub const fn visible_value(&self) -> u8 {
        match self.card {
            Some(card) if self.face_up => card.value(),
            _ => 0,
        }
    }

    /// Returns a copy of this slot with the real card assigned and turned
    /// face up. `was_face_down` is preserved.
    #[must_use]
    pub const fn flipped_up(self, card: Card) -> Self {
        Self {
            card: Some(card),
            face_up: true,
            was_face_down: self.was_face_down,
            bet: self.bet,
        }
    }

    /// Display identifier: [`HIDDEN_ID`] until the card is revealed.
    #[must_use]
    pub fn visible_id(&self) -> String {
        match self.card {
            Some(card) if self.face_up => card.id(),
            _ => HIDDEN_ID.to_string(),
        }
    }

    /// Display image path: the card back until the card is revealed.
    #[must_use]
    pub fn asset_path(&self) -> String {
        match self.card {
            Some(card) if self.face_up => card.asset_path(),
            _ => FACE_DOWN_ASSET.to_string(),
        }
    }
}
