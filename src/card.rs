//! Card types and deck constants.

use alloc::format;
use alloc::string::String;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Lowercase name used in card identifiers and asset paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "heart",
            Self::Diamonds => "diamond",
            Self::Clubs => "club",
            Self::Spades => "spade",
        }
    }
}

/// All four suits in deck-building order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero and render a placeholder name.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Point value toward a twenty total.
    ///
    /// Aces count as 1, ranks 2 through 10 as their face value, and the
    /// court cards (jack, queen, king) as 0.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1 => 1,
            2..=10 => self.rank,
            _ => 0,
        }
    }

    /// Lowercase rank name used in card identifiers and asset paths.
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        match self.rank {
            1 => "ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "jack",
            12 => "queen",
            13 => "king",
            _ => "?",
        }
    }

    /// Stable identifier such as `"8-heart"`.
    #[must_use]
    pub fn id(self) -> String {
        format!("{}-{}", self.rank_name(), self.suit.name())
    }

    /// Path of the face image for this card.
    #[must_use]
    pub fn asset_path(self) -> String {
        format!("cards/{}.JPG", self.id())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
