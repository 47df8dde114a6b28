//! Round integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twenty::{
    BUST_LIMIT, Card, Choice, DEALER_CARD_CEILING, DECK_SIZE, DealError, DecisionError, Deck,
    DealerError, GameCard, HIDDEN_ID, Outcome, Phase, POSITION_COUNT, RevealTarget, Round,
    RoundOptions, RoundingMode, SettleError, StartError, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn rigged_round(balance: usize, ante: usize, draws: &[Card]) -> Round {
    Round::start_with_deck(
        RoundOptions::default(),
        balance,
        ante,
        Deck::from_cards(draws.to_vec()),
    )
    .unwrap()
}

#[test]
fn card_value_table_holds_for_all_suits() {
    for suit in twenty::SUITS {
        assert_eq!(card(suit, 1).value(), 1);
        for rank in 2..=10 {
            assert_eq!(card(suit, rank).value(), rank);
        }
        for rank in 11..=13 {
            assert_eq!(card(suit, rank).value(), 0);
        }
    }
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut ids: Vec<String> = deck.cards().iter().map(|c| c.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation_and_not_identity() {
    let deck = Deck::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let shuffled = deck.shuffled(&mut rng);

    // Input deck untouched.
    assert_eq!(deck, Deck::standard());

    let sorted = |d: &Deck| {
        let mut ids: Vec<String> = d.cards().iter().map(|c| c.id()).collect();
        ids.sort();
        ids
    };
    assert_eq!(sorted(&deck), sorted(&shuffled));
    assert_ne!(deck.cards(), shuffled.cards());
}

#[test]
fn ante_validation() {
    let round = Round::new(RoundOptions::default(), 500, 1);
    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(round.place_ante(0).unwrap_err(), StartError::ZeroAnte);
    assert_eq!(
        round.place_ante(501).unwrap_err(),
        StartError::InsufficientFunds
    );

    let started = round.place_ante(100).unwrap();
    assert_eq!(started.phase(), Phase::InitialDealing);
    assert_eq!(started.wager(), 100);
    assert_eq!(started.balance(), 400);
    assert_eq!(
        started.place_ante(100).unwrap_err(),
        StartError::InvalidPhase
    );
}

#[test]
fn dealing_sequence_creates_expected_slots() {
    let round = rigged_round(1_000, 100, &[card(Suit::Hearts, 9), card(Suit::Clubs, 8)]);

    let step0 = round.deal_next().unwrap();
    let ante = step0.ante_card().unwrap();
    assert!(!ante.is_face_up());
    assert!(ante.was_face_down());
    assert_eq!(ante.bet(), 100);
    assert_eq!(ante.visible_id(), HIDDEN_ID);

    let step1 = step0.deal_next().unwrap();
    assert_eq!(step1.dealer_cards().len(), 1);
    assert!(step1.dealer_cards()[0].is_face_up());
    assert_eq!(step1.current_dealer_total(), 9);

    let step2 = step1.deal_next().unwrap();
    assert_eq!(step2.dealer_cards().len(), 2);
    assert!(!step2.dealer_cards()[1].is_face_up());
    assert_eq!(step2.phase(), Phase::PlayerDecisions);
    assert_eq!(step2.current_decision(), 0);

    // A fourth step is out of phase.
    assert_eq!(step2.deal_next().unwrap_err(), DealError::InvalidPhase);
}

#[test]
fn atomic_deal_converges_with_discrete_steps() {
    let round = rigged_round(1_000, 100, &[card(Suit::Hearts, 9), card(Suit::Clubs, 8)]);

    let discrete = round.deal_next().unwrap().deal_next().unwrap().deal_next().unwrap();
    let atomic = round.deal_all().unwrap();
    assert_eq!(discrete, atomic);
}

#[test]
fn transitions_never_mutate_their_input() {
    let round = rigged_round(1_000, 100, &[card(Suit::Hearts, 9), card(Suit::Clubs, 8)]);
    let snapshot = round.clone();

    let dealt = round.deal_all().unwrap();
    assert_eq!(round, snapshot);
    assert_ne!(dealt, snapshot);

    // A failed transition leaves the value untouched and reusable.
    assert_eq!(round.stand().unwrap_err(), DecisionError::InvalidPhase);
    assert_eq!(round, snapshot);
    assert!(round.deal_all().is_ok());
}

#[test]
fn decisions_advance_and_cap_at_four() {
    let round = rigged_round(1_000, 100, &[card(Suit::Hearts, 9), card(Suit::Clubs, 8)])
        .deal_all()
        .unwrap();

    let mut current = round;
    for expected in 1..=4u8 {
        current = current.decide(Choice::FaceDown).unwrap();
        assert_eq!(current.current_decision(), expected);
    }
    assert_eq!(current.phase(), Phase::DealerRevealing);
    assert_eq!(
        current.decide(Choice::FaceDown).unwrap_err(),
        DecisionError::InvalidPhase
    );

    // Each decision moved one ante from balance into the wager.
    assert_eq!(current.wager(), 500);
    assert_eq!(current.balance(), 1_000 - 500);
}

#[test]
fn face_up_decision_counts_toward_running_total_immediately() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 9),  // dealer up
            card(Suit::Spades, 10), // face-up decision
        ],
    )
    .deal_all()
    .unwrap();

    let after_up = round.decide(Choice::FaceUp).unwrap();
    assert_eq!(after_up.current_player_total(), 10);

    let after_down = after_up.decide(Choice::FaceDown).unwrap();
    // Hidden slots contribute nothing until the reveal phase.
    assert_eq!(after_down.current_player_total(), 10);
    assert_eq!(after_down.positions()[1].unwrap().visible_value(), 0);
}

#[test]
fn decision_requires_funds() {
    let round = rigged_round(100, 100, &[card(Suit::Hearts, 9), card(Suit::Clubs, 8)])
        .deal_all()
        .unwrap();
    assert_eq!(round.balance(), 0);
    assert_eq!(
        round.decide(Choice::FaceDown).unwrap_err(),
        DecisionError::InsufficientFunds
    );
}

#[test]
fn was_face_down_survives_the_reveal_pass() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 7),  // dealer up
            card(Suit::Spades, 10), // face-up decision
            card(Suit::Clubs, 9),   // dealer hole
            card(Suit::Hearts, 9),  // ante reveal
            card(Suit::Clubs, 5),   // face-down position reveal
        ],
    )
    .deal_all()
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .decide(Choice::FaceDown)
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap()
    .reveal_all_cards()
    .unwrap();

    let ante = round.ante_card().unwrap();
    assert!(ante.is_face_up());
    assert!(ante.was_face_down());

    let face_up_slot = round.positions()[0].unwrap();
    assert!(face_up_slot.is_face_up());
    assert!(!face_up_slot.was_face_down());

    let face_down_slot = round.positions()[1].unwrap();
    assert!(face_down_slot.is_face_up());
    assert!(face_down_slot.was_face_down());
}

#[test]
fn stand_immediately_then_lose() {
    // Ante 100, no decisions; ante reveals an 8, dealer lands on 17.
    let round = rigged_round(
        5_000,
        100,
        &[
            card(Suit::Hearts, 9), // dealer up
            card(Suit::Clubs, 8),  // dealer hole -> 17, no draw
            card(Suit::Spades, 8), // ante reveal
        ],
    )
    .deal_all()
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap()
    .reveal_all_cards()
    .unwrap()
    .settle()
    .unwrap();

    assert_eq!(round.final_player_total(), 8);
    assert_eq!(round.final_dealer_total(), 17);
    assert_eq!(round.result(), Some(Outcome::Lose));
    assert_eq!(round.total_payout(), 0);

    let settlement = round.settlement().unwrap();
    assert_eq!(settlement.new_balance, 4_900);
    assert_eq!(settlement.last_ante, 100);
}

#[test]
fn face_up_win_pays_ante_triple_and_position_double() {
    // Ante 100, one face-up 10; ante reveals a 9 for 19 against dealer 16.
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 7),   // dealer up
            card(Suit::Spades, 10),  // face-up decision
            card(Suit::Diamonds, 9), // dealer hole -> 16, no draw
            card(Suit::Clubs, 9),    // ante reveal
        ],
    )
    .deal_all()
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap()
    .reveal_all_cards()
    .unwrap()
    .settle()
    .unwrap();

    assert_eq!(round.final_player_total(), 19);
    assert_eq!(round.final_dealer_total(), 16);
    assert_eq!(round.result(), Some(Outcome::Win));
    // ante 100 x 3 + face-up position 100 x 2
    assert_eq!(round.total_payout(), 500);

    // balance 1000 - ante - one decision + payout
    assert_eq!(round.settlement().unwrap().new_balance, 1_300);
}

#[test]
fn equal_totals_tie_returns_the_wager() {
    // Player 6 + 6 + ante 8 = 20 against dealer 20.
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 10),  // dealer up
            card(Suit::Spades, 6),   // face-up decision
            card(Suit::Clubs, 6),    // face-up decision
            card(Suit::Diamonds, 10), // dealer hole -> 20
            card(Suit::Hearts, 8),   // ante reveal
        ],
    )
    .deal_all()
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap()
    .reveal_all_cards()
    .unwrap()
    .settle()
    .unwrap();

    assert_eq!(round.final_player_total(), 20);
    assert_eq!(round.final_dealer_total(), 20);
    assert_eq!(round.result(), Some(Outcome::Tie));
    assert_eq!(round.total_payout(), round.wager());
    // Full return: no net change against the pre-round balance.
    assert_eq!(round.settlement().unwrap().new_balance, 1_000);
}

#[test]
fn both_bust_returns_half_the_wager() {
    // Player 10 + 4 + ante 8 = 22, dealer 9 + 5 + 9 = 23.
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 9),   // dealer up
            card(Suit::Spades, 10),  // face-up decision
            card(Suit::Clubs, 4),    // face-up decision
            card(Suit::Diamonds, 5), // dealer hole -> 14, draws
            card(Suit::Hearts, 9),   // dealer draw -> 23, bust
            card(Suit::Spades, 8),   // ante reveal
        ],
    )
    .deal_all()
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap()
    .reveal_all_cards()
    .unwrap()
    .settle()
    .unwrap();

    assert_eq!(round.final_player_total(), 22);
    assert_eq!(round.final_dealer_total(), 23);
    assert_eq!(round.result(), Some(Outcome::BothBust));
    assert_eq!(round.total_payout(), round.wager() / 2);
}

#[test]
fn both_bust_rounding_follows_the_configured_mode() {
    // Ante 25, one face-up decision: odd wager of 75.
    let play = |options: RoundOptions| {
        Round::start_with_deck(
            options,
            1_000,
            25,
            Deck::from_cards(vec![
                card(Suit::Hearts, 9),   // dealer up
                card(Suit::Spades, 10),  // face-up decision
                card(Suit::Clubs, 10),   // face-up decision
                card(Suit::Diamonds, 5), // dealer hole -> 14, draws
                card(Suit::Hearts, 9),   // dealer draw -> 23, bust
                card(Suit::Spades, 8),   // ante reveal
            ]),
        )
        .unwrap()
    };

    // 10 + 10 + ante 8 = 28 bust, dealer 23 bust; wager 75.
    let finish = |round: Round| {
        round
            .deal_all()
            .unwrap()
            .decide(Choice::FaceUp)
            .unwrap()
            .decide(Choice::FaceUp)
            .unwrap()
            .stand()
            .unwrap()
            .run_dealer_turn()
            .unwrap()
            .reveal_all_cards()
            .unwrap()
            .settle()
            .unwrap()
    };

    let down = finish(play(RoundOptions::default()));
    assert_eq!(down.wager(), 75);
    assert_eq!(down.result(), Some(Outcome::BothBust));
    assert_eq!(down.total_payout(), 37);

    let up = finish(play(
        RoundOptions::default().with_rounding_both_bust(RoundingMode::Up),
    ));
    assert_eq!(up.total_payout(), 38);
}

#[test]
fn player_bust_alone_loses_regardless_of_dealer_total() {
    // Player 10 + 10 + ante 1 = 21 > 20, dealer 18.
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 9),   // dealer up
            card(Suit::Spades, 10),  // face-up decision
            card(Suit::Clubs, 10),   // face-up decision
            card(Suit::Diamonds, 9), // dealer hole -> 18
            card(Suit::Hearts, 1),   // ante reveal
        ],
    )
    .deal_all()
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap()
    .reveal_all_cards()
    .unwrap()
    .settle()
    .unwrap();

    assert_eq!(round.final_player_total(), BUST_LIMIT + 1);
    assert_eq!(round.final_dealer_total(), 18);
    assert_eq!(round.result(), Some(Outcome::Lose));
    assert_eq!(round.total_payout(), 0);
}

#[test]
fn dealer_stands_on_exactly_fifteen() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 7), // dealer up
            card(Suit::Clubs, 8),  // dealer hole -> 15 exactly
            card(Suit::Spades, 8), // ante reveal
        ],
    )
    .deal_all()
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap();

    assert_eq!(round.current_dealer_total(), 15);
    assert_eq!(round.dealer_cards().len(), 2);
    assert_eq!(round.phase(), Phase::PlayerRevealing);
}

#[test]
fn dealer_at_fourteen_draws_exactly_once_more() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 7),   // dealer up
            card(Suit::Clubs, 7),    // dealer hole -> 14, must draw
            card(Suit::Diamonds, 2), // dealer draw -> 16, stop
            card(Suit::Spades, 8),   // ante reveal
        ],
    )
    .deal_all()
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap();

    assert_eq!(round.current_dealer_total(), 16);
    assert_eq!(round.dealer_cards().len(), 3);
}

#[test]
fn dealer_card_ceiling_forces_a_stop() {
    // Court cards are worth zero, so the dealer can never reach the stand
    // total; the ceiling must cut the loop at ten cards.
    let mut draws = vec![card(Suit::Hearts, 11)]; // dealer up
    for suit in twenty::SUITS {
        draws.push(card(suit, 12));
        draws.push(card(suit, 13));
    }
    draws.push(card(Suit::Spades, 11)); // eighth draw, reaching the ceiling
    draws.push(card(Suit::Clubs, 5)); // ante reveal

    let round = rigged_round(1_000, 100, &draws)
        .deal_all()
        .unwrap()
        .stand()
        .unwrap()
        .run_dealer_turn()
        .unwrap();

    assert_eq!(round.dealer_cards().len(), DEALER_CARD_CEILING);
    assert_eq!(round.current_dealer_total(), 0);
    assert_eq!(round.phase(), Phase::PlayerRevealing);
}

#[test]
fn completing_the_draw_loop_early_is_rejected() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 7), // dealer up
            card(Suit::Clubs, 7),  // dealer hole -> 14, must draw
        ],
    )
    .deal_all()
    .unwrap()
    .stand()
    .unwrap()
    .reveal_dealer_card()
    .unwrap();

    assert_eq!(round.phase(), Phase::DealerDrawing);
    assert_eq!(
        round.complete_dealer_drawing().unwrap_err(),
        DealerError::StillDrawing
    );
}

#[test]
fn reveal_order_is_ante_first_then_positions() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 9), // dealer up
            card(Suit::Clubs, 8),  // dealer hole
            card(Suit::Spades, 4), // ante reveal
            card(Suit::Hearts, 5), // position 0 reveal
            card(Suit::Clubs, 6),  // position 1 reveal
        ],
    )
    .deal_all()
    .unwrap()
    .decide(Choice::FaceDown)
    .unwrap()
    .decide(Choice::FaceDown)
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap();

    assert_eq!(round.next_reveal_target(), Some(RevealTarget::Ante));
    let round = round.reveal_next_card().unwrap();
    assert_eq!(round.final_player_total(), 4);

    assert_eq!(round.next_reveal_target(), Some(RevealTarget::Position(0)));
    let round = round.reveal_next_card().unwrap();
    assert_eq!(round.final_player_total(), 9);

    assert_eq!(round.next_reveal_target(), Some(RevealTarget::Position(1)));
    let round = round.reveal_next_card().unwrap();
    assert_eq!(round.final_player_total(), 15);

    assert_eq!(round.next_reveal_target(), None);
    assert_eq!(round.phase(), Phase::Payout);
}

#[test]
fn settle_is_terminal() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 8),
            card(Suit::Spades, 8),
        ],
    )
    .deal_all()
    .unwrap()
    .stand()
    .unwrap()
    .run_dealer_turn()
    .unwrap()
    .reveal_all_cards()
    .unwrap();

    assert_eq!(round.settlement(), None);
    let settled = round.settle().unwrap();
    assert!(settled.settlement().is_some());
    assert_eq!(settled.settle().unwrap_err(), SettleError::AlreadySettled);

    // Settling out of phase is rejected.
    assert_eq!(
        rigged_round(1_000, 100, &[card(Suit::Hearts, 9)])
            .settle()
            .unwrap_err(),
        SettleError::InvalidPhase
    );
}

#[test]
fn deck_and_dealt_cards_always_cover_the_full_set() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let round = Round::start_with_rng(RoundOptions::default(), 5_000, 100, &mut rng)
        .unwrap()
        .deal_all()
        .unwrap()
        .decide(Choice::FaceUp)
        .unwrap()
        .decide(Choice::FaceDown)
        .unwrap()
        .decide(Choice::FaceUp)
        .unwrap()
        .stand()
        .unwrap()
        .run_dealer_turn()
        .unwrap()
        .reveal_all_cards()
        .unwrap()
        .settle()
        .unwrap();

    let mut ids: Vec<String> = round.deck().cards().iter().map(|c| c.id()).collect();
    let dealt = round
        .dealer_cards()
        .iter()
        .copied()
        .chain(round.ante_card().copied())
        .chain(round.positions().iter().flatten().copied());
    for slot in dealt {
        if let Some(c) = slot.card() {
            ids.push(c.id());
        }
    }

    assert_eq!(ids.len(), DECK_SIZE);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), DECK_SIZE);
}

#[test]
fn drawing_from_an_exhausted_deck_fails() {
    // Only the ante step succeeds; the dealer's up card has nothing to draw.
    let round = rigged_round(1_000, 100, &[]);
    let step0 = round.deal_next().unwrap();
    assert_eq!(step0.deal_next().unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn visible_identifiers_use_the_hidden_sentinel() {
    let hidden = GameCard::face_down(100);
    assert_eq!(hidden.visible_id(), HIDDEN_ID);
    assert_eq!(hidden.asset_path(), twenty::FACE_DOWN_ASSET);

    let revealed = hidden.flipped_up(card(Suit::Hearts, 8));
    assert_eq!(revealed.visible_id(), "8-heart");
    assert_eq!(revealed.asset_path(), "cards/8-heart.JPG");
    assert!(revealed.was_face_down());
}

#[test]
fn stand_keeps_undecided_positions_out_of_the_wager() {
    let round = rigged_round(
        1_000,
        100,
        &[
            card(Suit::Hearts, 9),  // dealer up
            card(Suit::Spades, 10), // face-up decision
        ],
    )
    .deal_all()
    .unwrap()
    .decide(Choice::FaceUp)
    .unwrap()
    .stand()
    .unwrap();

    assert_eq!(round.wager(), 200);
    assert_eq!(round.positions().iter().flatten().count(), 1);
    assert_eq!(round.decisions_remaining(), POSITION_COUNT as u8 - 1);
}
