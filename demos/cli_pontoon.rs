//! Console blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{DecisionSource, Round, TableEvent, TableSink};

struct ConsoleInput;

impl DecisionSource for ConsoleInput {
    fn next_decision(&mut self) -> String {
        prompt_line("Do you want to [h]it or [s]tand? ")
    }
}

struct ConsolePrinter;

impl TableSink for ConsolePrinter {
    fn present(&mut self, event: &TableEvent) {
        match event {
            TableEvent::Hands(_) => println!("\n{event}"),
            _ => println!("{event}"),
        }
    }
}

fn main() {
    println!("Welcome to Blackjack!");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let mut round = Round::new(seed);
        seed = seed.wrapping_add(1);

        if let Err(err) = round.play(&mut ConsoleInput, &mut ConsolePrinter) {
            println!("Round error: {err}");
            break;
        }

        match prompt_line("\nPlay again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
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
