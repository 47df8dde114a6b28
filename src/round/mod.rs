//! Round engine and state transitions.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::StartError;
use crate::game_card::GameCard;
use crate::options::RoundOptions;
use crate::payout::BUST_LIMIT;
use crate::result::{Outcome, Settlement};

mod deal;
mod dealer;
mod decision;
mod reveal;
pub mod state;

pub use dealer::{DEALER_CARD_CEILING, DEALER_STAND_TOTAL};
pub use state::{Choice, Phase, RevealTarget};

/// Number of optional bonus positions.
pub const POSITION_COUNT: usize = 4;

/// A single round of the game, from ante to payout.
///
/// A `Round` is an immutable snapshot: every transition takes `&self` and
/// returns a new `Round`, so a display layer can keep any snapshot and pace
/// the discrete steps on its own clock. A failed transition leaves the
/// caller's value untouched and fully reusable.
///
/// # Example
///
/// ```
/// use twenty::{Choice, Phase, Round, RoundOptions};
///
/// let round = Round::start(RoundOptions::default(), 5_000, 100, 42).unwrap();
/// let round = round.deal_all().unwrap();
/// assert_eq!(round.phase(), Phase::PlayerDecisions);
/// let round = round.decide(Choice::FaceUp).unwrap();
/// let round = round.stand().unwrap();
/// let round = round.run_dealer_turn().unwrap();
/// let round = round.reveal_all_cards().unwrap();
/// let settled = round.settle().unwrap();
/// assert!(settled.settlement().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) deck: Deck,
    pub(crate) dealer_cards: Vec<GameCard>,
    pub(crate) positions: [Option<GameCard>; POSITION_COUNT],
    pub(crate) ante_card: Option<GameCard>,
    pub(crate) ante_bet: usize,
    pub(crate) wager: usize,
    pub(crate) balance: usize,
    pub(crate) phase: Phase,
    pub(crate) current_decision: u8,
    pub(crate) player_total: u8,
    pub(crate) dealer_total: u8,
    pub(crate) final_player_total: u8,
    pub(crate) final_dealer_total: u8,
    pub(crate) result: Option<Outcome>,
    pub(crate) total_payout: usize,
    pub(crate) deal_step: u8,
    pub(crate) options: RoundOptions,
}

impl Round {
    /// Creates a round in the betting phase with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(options: RoundOptions, balance: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new_with_rng(options, balance, &mut rng)
    }

    /// Creates a round in the betting phase, shuffling with the caller's RNG.
    #[must_use]
    pub fn new_with_rng<R: Rng + ?Sized>(options: RoundOptions, balance: usize, rng: &mut R) -> Self {
        Self::new_with_deck(options, balance, Deck::standard().shuffled(rng))
    }

    /// Creates a round in the betting phase with an explicit deck
    /// (first card drawn first). Intended for deterministic play and tests.
    #[must_use]
    pub const fn new_with_deck(options: RoundOptions, balance: usize, deck: Deck) -> Self {
        Self {
            deck,
            dealer_cards: Vec::new(),
            positions: [None; POSITION_COUNT],
            ante_card: None,
            ante_bet: 0,
            wager: 0,
            balance,
            phase: Phase::Betting,
            current_decision: 0,
            player_total: 0,
            dealer_total: 0,
            final_player_total: 0,
            final_dealer_total: 0,
            result: None,
            total_payout: 0,
            deal_step: 0,
            options,
        }
    }

    /// Places the ante and moves to the initial dealing phase.
    ///
    /// The ante is deducted from the balance and becomes the opening wager.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is past betting, the ante is zero, or
    /// the ante exceeds the balance.
    pub fn place_ante(&self, ante_bet: usize) -> Result<Self, StartError> {
        if self.phase != Phase::Betting {
            return Err(StartError::InvalidPhase);
        }
        if ante_bet == 0 {
            return Err(StartError::ZeroAnte);
        }
        if ante_bet > self.balance {
            return Err(StartError::InsufficientFunds);
        }

        let mut next = self.clone();
        next.ante_bet = ante_bet;
        next.balance = self.balance - ante_bet;
        next.wager = ante_bet;
        next.phase = Phase::InitialDealing;
        Ok(next)
    }

    /// Starts a round: a fresh seed-shuffled deck with the ante placed.
    ///
    /// Equivalent to [`Round::new`] followed by [`Round::place_ante`].
    ///
    /// # Errors
    ///
    /// Returns an error if the ante is zero or exceeds the balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty::{Phase, Round, RoundOptions};
    ///
    /// let round = Round::start(RoundOptions::default(), 5_000, 100, 42).unwrap();
    /// assert_eq!(round.phase(), Phase::InitialDealing);
    /// assert_eq!(round.wager(), 100);
    /// ```
    pub fn start(
        options: RoundOptions,
        balance: usize,
        ante_bet: usize,
        seed: u64,
    ) -> Result<Self, StartError> {
        Self::new(options, balance, seed).place_ante(ante_bet)
    }

    /// Starts a round with an injected RNG for the shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if the ante is zero or exceeds the balance.
    pub fn start_with_rng<R: Rng + ?Sized>(
        options: RoundOptions,
        balance: usize,
        ante_bet: usize,
        rng: &mut R,
    ) -> Result<Self, StartError> {
        Self::new_with_rng(options, balance, rng).place_ante(ante_bet)
    }

    /// Starts a round with an explicit deck, skipping the shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if the ante is zero or exceeds the balance.
    pub fn start_with_deck(
        options: RoundOptions,
        balance: usize,
        ante_bet: usize,
        deck: Deck,
    ) -> Result<Self, StartError> {
        Self::new_with_deck(options, balance, deck).place_ante(ante_bet)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's balance after deducted bets.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the total amount at risk this round.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the ante bet.
    #[must_use]
    pub const fn ante_bet(&self) -> usize {
        self.ante_bet
    }

    /// Returns the index of the next position to decide (0 through 4).
    #[must_use]
    pub const fn current_decision(&self) -> u8 {
        self.current_decision
    }

    /// Returns how many position decisions remain.
    #[must_use]
    pub const fn decisions_remaining(&self) -> u8 {
        POSITION_COUNT as u8 - self.current_decision
    }

    /// Running total of the player's currently visible cards.
    ///
    /// Face-down slots contribute nothing until the reveal phase.
    #[must_use]
    pub const fn current_player_total(&self) -> u8 {
        self.player_total
    }

    /// Running total of the dealer's visible cards.
    #[must_use]
    pub const fn current_dealer_total(&self) -> u8 {
        self.dealer_total
    }

    /// Whether the visible player total is already over [`BUST_LIMIT`].
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.player_total > BUST_LIMIT
    }

    /// Player total after all reveals. Zero until the dealer turn completes.
    #[must_use]
    pub const fn final_player_total(&self) -> u8 {
        self.final_player_total
    }

    /// Dealer total as fixed at settlement. Zero until settled.
    #[must_use]
    pub const fn final_dealer_total(&self) -> u8 {
        self.final_dealer_total
    }

    /// The settled outcome, if the round has reached it.
    #[must_use]
    pub const fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// Amount paid back to the player at settlement.
    #[must_use]
    pub const fn total_payout(&self) -> usize {
        self.total_payout
    }

    /// The dealer's card sequence, first card face up.
    #[must_use]
    pub fn dealer_cards(&self) -> &[GameCard] {
        &self.dealer_cards
    }

    /// The four position slots; undecided positions are `None`.
    #[must_use]
    pub const fn positions(&self) -> &[Option<GameCard>; POSITION_COUNT] {
        &self.positions
    }

    /// The ante card, present once dealing has begun.
    #[must_use]
    pub const fn ante_card(&self) -> Option<&GameCard> {
        self.ante_card.as_ref()
    }

    /// The remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Terminal settlement snapshot for the session layer.
    ///
    /// `None` until [`Round::settle`](Round::settle) has run.
    #[must_use]
    pub fn settlement(&self) -> Option<Settlement> {
        self.result.map(|outcome| Settlement {
            outcome,
            total_payout: self.total_payout,
            wager: self.wager,
            final_player_total: self.final_player_total,
            final_dealer_total: self.final_dealer_total,
            new_balance: self.balance + self.total_payout,
            last_ante: self.ante_bet,
        })
    }
}
