//! Payout calculation for a finished round.

use crate::game_card::GameCard;
use crate::options::RoundingMode;
use crate::result::Outcome;
use crate::round::POSITION_COUNT;

/// Totals above this value are bust.
pub const BUST_LIMIT: u8 = 20;

/// Win multiplier for slots decided face up (stake plus equal winnings).
pub const FACE_UP_MULTIPLIER: usize = 2;

/// Win multiplier for slots created face down (stake plus double winnings).
pub const FACE_DOWN_MULTIPLIER: usize = 3;

/// Payout of a single winning slot, keyed on how the slot was created.
const fn slot_payout(slot: &GameCard) -> usize {
    if slot.was_face_down() {
        slot.bet() * FACE_DOWN_MULTIPLIER
    } else {
        slot.bet() * FACE_UP_MULTIPLIER
    }
}

/// Half the wager, rounded per `mode`. Only the remainder of an odd wager
/// is in question, so `Nearest` behaves like `Up`.
pub(crate) const fn half_wager(wager: usize, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Down => wager / 2,
        RoundingMode::Up | RoundingMode::Nearest => wager.div_ceil(2),
    }
}

/// Determines the result category and payout for the final totals.
///
/// Undecided positions (`None` entries) never participate. Winning slots pay
/// `bet ×` [`FACE_DOWN_MULTIPLIER`] if they were created face down and
/// `bet ×` [`FACE_UP_MULTIPLIER`] otherwise; the ante card is always created
/// face down.
#[must_use]
pub fn settle(
    final_player_total: u8,
    final_dealer_total: u8,
    wager: usize,
    ante_card: Option<&GameCard>,
    positions: &[Option<GameCard>; POSITION_COUNT],
    rounding: RoundingMode,
) -> (Outcome, usize) {
    let player_bust = final_player_total > BUST_LIMIT;
    let dealer_bust = final_dealer_total > BUST_LIMIT;

    if player_bust && dealer_bust {
        (Outcome::BothBust, half_wager(wager, rounding))
    } else if player_bust {
        (Outcome::Lose, 0)
    } else if dealer_bust || final_player_total > final_dealer_total {
        let mut total = ante_card.map_or(0, slot_payout);
        for slot in positions.iter().flatten() {
            total += slot_payout(slot);
        }
        (Outcome::Win, total)
    } else if final_player_total == final_dealer_total {
        (Outcome::Tie, wager)
    } else {
        (Outcome::Lose, 0)
    }
}
