//! Round phase and step types.

/// Round phase.
///
/// Phases advance in one direction only; the multi-step phases (dealing,
/// dealer drawing, player revealing) repeat their discrete step until
/// exhausted before moving on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting the ante before any card is dealt.
    Betting,
    /// Dealing the ante card and the dealer's two cards.
    InitialDealing,
    /// Waiting for the player's position decisions.
    PlayerDecisions,
    /// Flipping the dealer's hole card.
    DealerRevealing,
    /// Dealer draws toward the stand total.
    DealerDrawing,
    /// Flipping the player's hidden cards one by one.
    PlayerRevealing,
    /// All cards are up; the round settles and becomes terminal.
    Payout,
}

/// A player's choice for the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Draw and show the card immediately; lower payout multiplier.
    FaceUp,
    /// Keep the card hidden until the reveal phase; higher payout multiplier.
    FaceDown,
}

/// The next hidden card in the fixed player reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    /// The ante card, always revealed first.
    Ante,
    /// A decided position slot, revealed in position order.
    Position(usize),
}
