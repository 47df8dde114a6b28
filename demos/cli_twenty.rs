//! CLI demo that plays rounds of the "closer to 20" game.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twenty::{Card, Choice, GameCard, Outcome, Phase, Round, RoundOptions, Suit};

fn main() {
    env_logger::init();
    println!("Twenty CLI demo (type 'q' to quit)");

    let mut balance: usize = 5_000;
    let mut last_ante: usize = 0;

    loop {
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let hint = if last_ante > 0 && last_ante <= balance {
            format!(" [enter for {last_ante}]")
        } else {
            String::new()
        };
        let Some(ante) = prompt_ante(
            &format!("Ante (1-{balance}, 0 to quit){hint}: "),
            last_ante.min(balance),
        ) else {
            break;
        };
        if ante == 0 {
            println!("Goodbye.");
            break;
        }

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let mut round = match Round::start(RoundOptions::default(), balance, ante, seed) {
            Ok(round) => round,
            Err(err) => {
                println!("Ante error: {err}");
                continue;
            }
        };

        round = match round.deal_all() {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                continue;
            }
        };

        while round.phase() == Phase::PlayerDecisions {
            print_table(&round);
            let action = prompt_line(&format!(
                "Position {} of 4 - [u]face up (2x win) [d]face down (3x win) [s]stand: ",
                round.current_decision() + 1
            ));

            let result = match action.as_str() {
                "u" | "up" => round.decide(Choice::FaceUp),
                "d" | "down" => round.decide(Choice::FaceDown),
                "s" | "stand" => round.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(next) => round = next,
                Err(err) => println!("Decision error: {err}"),
            }
        }

        round = match round.run_dealer_turn() {
            Ok(round) => round,
            Err(err) => {
                println!("Dealer error: {err}");
                continue;
            }
        };
        println!(
            "Dealer stands on {} with {} card(s).",
            round.current_dealer_total(),
            round.dealer_cards().len()
        );

        round = match round.reveal_all_cards() {
            Ok(round) => round,
            Err(err) => {
                println!("Reveal error: {err}");
                continue;
            }
        };
        round = match round.settle() {
            Ok(round) => round,
            Err(err) => {
                println!("Settle error: {err}");
                continue;
            }
        };

        print_table(&round);
        if let Some(settlement) = round.settlement() {
            let message = match settlement.outcome {
                Outcome::Win => format!("You win! Payout {}.", settlement.total_payout),
                Outcome::Lose => "You lose.".to_string(),
                Outcome::Tie => "Tie. Bets returned.".to_string(),
                Outcome::BothBust => {
                    format!("Both bust. Half the wager ({}) returned.", settlement.total_payout)
                }
            };
            println!(
                "{message} Player {} vs dealer {}.",
                settlement.final_player_total, settlement.final_dealer_total
            );
            balance = settlement.new_balance;
            last_ante = settlement.last_ante;
            println!("Balance: {balance}\n");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_ante(prompt: &str, default: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() && default > 0 {
            return Some(default);
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());

    let dealer = round
        .dealer_cards()
        .iter()
        .map(format_slot)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Dealer: {dealer} (showing {})", round.current_dealer_total());

    let ante = round.ante_card().map_or("--".to_string(), format_slot);
    let positions = round
        .positions()
        .iter()
        .map(|slot| slot.as_ref().map_or("--".to_string(), format_slot))
        .collect::<Vec<_>>()
        .join(" ");
    println!("You:    ante {ante} | positions {positions}");

    let total = if round.phase() == Phase::Payout {
        round.final_player_total()
    } else {
        round.current_player_total()
    };
    println!(
        "Total {} | wager {} | balance {}\n",
        total,
        round.wager(),
        round.balance()
    );
}

fn format_slot(slot: &GameCard) -> String {
    match slot.card() {
        Some(card) if slot.is_face_up() => format_card(card),
        _ => "??".to_string(),
    }
}

fn format_card(card: Card) -> String {
    let suit = match card.suit {
        Suit::Hearts => "H",
        Suit::Diamonds => "D",
        Suit::Clubs => "C",
        Suit::Spades => "S",
    };
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };
    format!("{rank}{suit}")
}
