//! Terminal blackjack.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use asciijack::{
    Action, BetSource, Card, Display, InputSource, STARTING_CHIPS, Session, SessionOptions, Suit,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "asciijack", about = "Six-deck blackjack against the dealer")]
struct Cli {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting chip balance
    #[arg(long, default_value_t = STARTING_CHIPS)]
    chips: i64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("starting session with seed {seed}");

    let options = SessionOptions::default()
        .with_starting_chips(cli.chips)
        .with_seed(seed);
    let mut session = Session::new(options);

    println!("Blackjack: 6 decks, dealer stands on 17, blackjack pays 3:2 (type 'q' to quit)");
    if let Err(err) = session.run(&mut StdinBets, &mut StdinInput, &mut Terminal) {
        log::error!("round aborted: {err}");
        eprintln!("error: {err}");
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

struct StdinBets;

impl BetSource for StdinBets {
    fn bet_amount(&mut self) -> Option<String> {
        let input = prompt_line("\nBet amount: ")?;
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            return None;
        }
        Some(input)
    }
}

struct StdinInput;

impl InputSource for StdinInput {
    fn request_decision(&mut self, prompt: &str, legal: &[Action]) -> Action {
        loop {
            // Closed stdin: standing is always legal.
            let Some(input) = prompt_line(prompt) else {
                return Action::Stand;
            };
            let action = input.chars().next().and_then(Action::from_key);
            match action {
                Some(action) if legal.contains(&action) => return action,
                _ => println!("Unknown action."),
            }
        }
    }
}

struct Terminal;

impl Display for Terminal {
    fn append(&mut self, line: &str) {
        println!("{line}");
    }

    fn render_hand(&mut self, title: &str, cards: &[Card], hide_first: bool) {
        let shown: Vec<String> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if hide_first && i == 0 {
                    colorize("??", "90")
                } else {
                    format_card(card)
                }
            })
            .collect();
        println!("{title}: {}", shown.join(" "));
    }

    fn show_chip_balance(&mut self, chips: i64) {
        println!("Chips: {chips}");
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
