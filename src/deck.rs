//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, SUITS};

/// An ordered stack of cards. The first card is drawn first.
///
/// A `Deck` is a value: [`Deck::draw`] and [`Deck::shuffled`] leave `self`
/// untouched and return new decks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the canonical 52-card deck in suit-major order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from explicit cards, first card drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a uniformly shuffled copy of this deck.
    ///
    /// Every permutation of the input is equally likely under a uniform RNG.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Draws the top card, returning it together with the remaining deck.
    ///
    /// Returns `None` when the deck is empty.
    #[must_use]
    pub fn draw(&self) -> Option<(Card, Self)> {
        let (&card, rest) = self.cards.split_first()?;
        Some((
            card,
            Self {
                cards: rest.to_vec(),
            },
        ))
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
