//! A casino "closer to 20" card game engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] value that walks a full round: ante,
//! three-step initial deal, up to four face-up/face-down position decisions,
//! the dealer's reveal-and-draw turn, the staged player reveal, and
//! settlement. Every transition takes the round by reference and returns a
//! new value, so a display layer can hold any snapshot and pace the discrete
//! steps on its own clock.
//!
//! # Example
//!
//! ```
//! use twenty::{Choice, Round, RoundOptions};
//!
//! let round = Round::start(RoundOptions::default(), 5_000, 100, 42).unwrap();
//! let round = round.deal_all().unwrap();
//! let round = round.decide(Choice::FaceDown).unwrap();
//! let _ = round;
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
pub mod game_card;
pub mod options;
pub mod payout;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use deck::Deck;
pub use error::{DealError, DealerError, DecisionError, RevealError, SettleError, StartError};
pub use game_card::{FACE_DOWN_ASSET, GameCard, HIDDEN_ID};
pub use options::{RoundOptions, RoundingMode};
pub use payout::{BUST_LIMIT, FACE_DOWN_MULTIPLIER, FACE_UP_MULTIPLIER};
pub use result::{Outcome, Settlement};
pub use round::{
    Choice, DEALER_CARD_CEILING, DEALER_STAND_TOTAL, POSITION_COUNT, Phase, RevealTarget, Round,
};
