//! Round outcome and settlement types.

/// Final category of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts alone, or player total is higher).
    Win,
    /// Player loses (player busts alone, or dealer total is at least equal).
    Lose,
    /// Equal totals with neither side bust; the wager is returned.
    Tie,
    /// Both sides bust; half the wager is returned.
    BothBust,
}

/// Terminal snapshot handed to the session layer once a round is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome category.
    pub outcome: Outcome,
    /// Amount paid back to the player (stake included where applicable).
    pub total_payout: usize,
    /// Total amount that was at risk this round.
    pub wager: usize,
    /// Player total after all reveals.
    pub final_player_total: u8,
    /// Dealer total after the draw loop.
    pub final_dealer_total: u8,
    /// Balance including the payout, ready to carry into the next round.
    pub new_balance: usize,
    /// The ante of this round, offered back for rebetting.
    pub last_ante: usize,
}
