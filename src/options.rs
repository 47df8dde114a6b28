//! Round configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest (halves round up).
    Nearest,
}

/// Configuration options for a round.
///
/// The rule set itself is fixed; the only knob is how the half-wager refund
/// on a double bust is rounded for odd wagers.
///
/// ```
/// use twenty::{RoundOptions, RoundingMode};
///
/// let options = RoundOptions::default().with_rounding_both_bust(RoundingMode::Up);
/// assert_eq!(options.rounding_both_bust, RoundingMode::Up);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Rounding mode for the both-bust half-wager refund.
    pub rounding_both_bust: RoundingMode,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            rounding_both_bust: RoundingMode::Down,
        }
    }
}

impl RoundOptions {
    /// Sets the rounding mode for the both-bust half-wager refund.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty::{RoundOptions, RoundingMode};
    ///
    /// let options = RoundOptions::default().with_rounding_both_bust(RoundingMode::Nearest);
    /// assert_eq!(options.rounding_both_bust, RoundingMode::Nearest);
    /// ```
    #[must_use]
    pub const fn with_rounding_both_bust(mut self, mode: RoundingMode) -> Self {
        self.rounding_both_bust = mode;
        self
    }
}
