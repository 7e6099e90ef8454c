//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use adjustable_blackjack::{
    Action, Card, DealerHand, Game, GameState, MenuEntry, Player, SettingKind, SettingValue,
    Settings, Suit, comparison_label, dealer_label, format_currency, format_signed_currency,
    hand_label,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Adjustable Blackjack (type 'q' at any prompt to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(Settings::default(), seed);

    loop {
        println!("\n----- MENU -----");
        println!("1. Start game");
        println!("2. Options");
        println!("3. View Balance");
        println!("4. Restart game");
        println!("5. Exit");

        match prompt_number("> ") {
            Some(1) => play(&mut game),
            Some(2) => options(&mut game),
            Some(3) => println!("Balance: {}", format_currency(game.balance())),
            Some(4) => {
                game.restart();
                println!("Balance reset to {}.", format_currency(game.balance()));
            }
            Some(5) | None => break,
            Some(_) => println!("Pick a number between 1 and 5."),
        }
    }

    println!("\nThank you for playing Blackjack!");
    println!("Goodbye!");
}

struct Terminal;

impl Player for Terminal {
    fn decide(&mut self, _game: &Game, legal: &[Action]) -> Action {
        let menu: Vec<String> = legal
            .iter()
            .map(|action| {
                let (key, label) = action_key(*action);
                colorize(&format!("[{key}]{label}"), "32")
            })
            .collect();

        loop {
            let Some(input) = prompt_line(&format!("Actions: {} > ", menu.join(" "))) else {
                return Action::Stand;
            };
            let chosen = legal
                .iter()
                .copied()
                .find(|action| input == action_key(*action).0 || input == action_key(*action).1);
            match chosen {
                Some(action) => return action,
                None => println!("Unknown action."),
            }
        }
    }

    fn observe(&mut self, game: &Game) {
        print_table(game);
    }
}

const fn action_key(action: Action) -> (&'static str, &'static str) {
    match action {
        Action::Hit => ("h", "hit"),
        Action::Stand => ("s", "stand"),
        Action::Double => ("d", "double"),
        Action::Split => ("p", "split"),
        Action::Forfeit => ("u", "surrender"),
    }
}

fn play(game: &mut Game) {
    let balance = game.balance();
    if balance == 0 {
        println!("You are out of money. Restart the game to play again.");
        return;
    }

    let prompt = format!("Bet in dollars (1-{}, 0 to go back): ", balance / 100);
    let Some(dollars) = prompt_number(&prompt) else {
        return;
    };
    if dollars == 0 {
        return;
    }

    match game.play_round(dollars.saturating_mul(100), &mut Terminal) {
        Ok(result) => {
            println!("Round complete.");
            for hand in &result.hands {
                println!(
                    "  Hand #{}: {} (payout {})",
                    hand.hand_index + 1,
                    hand.outcome,
                    format_currency(hand.payout)
                );
            }
            println!(
                "Profit: {} | Net: {} | Balance: {}",
                format_currency(result.profit),
                format_signed_currency(result.net),
                format_currency(game.balance())
            );
        }
        Err(err) => println!("Round error: {err}"),
    }
}

fn options(game: &mut Game) {
    loop {
        println!("\n----- SETTINGS -----");
        let entries: Vec<MenuEntry> = game.settings().menu().collect();
        for (index, entry) in entries.iter().enumerate() {
            match entry {
                MenuEntry::Rule(key) => {
                    let rule = game.settings().rule(*key);
                    println!("{}. {:<30}{}", index + 1, rule.display_name, rule.value);
                }
                MenuEntry::ResetAll => println!("{}. Reset all", index + 1),
                MenuEntry::Return => println!("{}. Return", index + 1),
            }
        }

        let Some(choice) = prompt_number("> ") else {
            return;
        };
        let Some(entry) = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| entries.get(n))
        else {
            println!("Pick a number between 1 and {}.", entries.len());
            continue;
        };

        match entry {
            MenuEntry::Rule(key) => {
                let rule = *game.settings().rule(*key);
                println!("{}", rule.description);
                let value = match rule.kind {
                    SettingKind::Boolean => {
                        let SettingValue::Boolean(current) = rule.value else {
                            continue;
                        };
                        SettingValue::Boolean(!current)
                    }
                    SettingKind::BoundedInt { min, max } => {
                        let Some(n) = prompt_number(&format!("New value ({min}-{max}): ")) else {
                            return;
                        };
                        SettingValue::Int(u32::try_from(n).unwrap_or(u32::MAX))
                    }
                };
                if let Err(err) = game.change_setting(*key, value) {
                    println!("Setting error: {err}");
                }
            }
            MenuEntry::ResetAll => {
                if let Err(err) = game.reset_settings() {
                    println!("Setting error: {err}");
                }
            }
            MenuEntry::Return => return,
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_number(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid input. Please try again."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nShoe: {} cards remaining", game.shoe().remaining());

    let dealer = game.dealer_hand();
    println!("Dealer's hand: {}", format_dealer(dealer));
    println!("Value: {}", dealer_label(dealer));

    let turn = game.current_turn();
    let playing = matches!(game.state(), GameState::PlayerTurn | GameState::SplitOffer);
    for (index, hand) in game.hands().iter().enumerate() {
        let marker = if playing && index == turn.hand_index {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} Hand #{}: {} | {}{}",
            index + 1,
            format_cards(hand.cards()),
            hand_label(hand),
            comparison_label(hand, dealer)
        );
    }
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }
    format_cards(dealer.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.is_visible() {
        return "??".to_string();
    }

    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(
        &format!("{}{}", card.rank_symbol(), card.suit.symbol()),
        color_code,
    )
}
