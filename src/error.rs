//! Error types for round transitions.
//!
//! Every transition invoked outside its phase fails with an `InvalidPhase`
//! variant rather than silently doing nothing, and a failed call never
//! touches the caller's round value.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The round is past the betting phase.
    #[error("invalid phase for placing an ante")]
    InvalidPhase,
    /// Ante bet is zero.
    #[error("ante bet is zero")]
    ZeroAnte,
    /// Ante bet exceeds the player's balance.
    #[error("insufficient funds for the ante")]
    InsufficientFunds,
}

/// Errors that can occur during the initial dealing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The round is not in the initial dealing phase.
    #[error("invalid phase for dealing")]
    InvalidPhase,
    /// The deck has been exhausted.
    #[error("deck is empty")]
    EmptyDeck,
}

/// Errors that can occur during player decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The round is not in the player decision phase, or all four
    /// decisions have already been made.
    #[error("invalid phase for a decision")]
    InvalidPhase,
    /// The balance cannot cover another position bet.
    #[error("insufficient funds for this position")]
    InsufficientFunds,
    /// The deck has been exhausted.
    #[error("deck is empty")]
    EmptyDeck,
}

/// Errors that can occur during the dealer's reveal and draw turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The round is not in the dealer revealing or drawing phase.
    #[error("invalid phase for the dealer turn")]
    InvalidPhase,
    /// The deck has been exhausted.
    #[error("deck is empty")]
    EmptyDeck,
    /// The dealer has reached the card ceiling.
    #[error("dealer has reached the card ceiling")]
    TooManyCards,
    /// The draw loop cannot complete while the dealer must still draw.
    #[error("dealer must still draw")]
    StillDrawing,
}

/// Errors that can occur during the player reveal loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// The round is not in the player revealing phase.
    #[error("invalid phase for revealing")]
    InvalidPhase,
    /// The deck has been exhausted.
    #[error("deck is empty")]
    EmptyDeck,
    /// Every dealt card is already face up.
    #[error("no hidden cards remain")]
    NothingToReveal,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round is not in the payout phase.
    #[error("invalid phase for settlement")]
    InvalidPhase,
    /// The round has already been settled.
    #[error("round has already been settled")]
    AlreadySettled,
}
