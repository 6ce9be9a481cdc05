use std::io::{self, BufRead, Write};

use clap::Parser;
use prorata_book::Book;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

/// A demo shell for a single-symbol pro-rata order book.
#[derive(Parser)]
#[command(name = "prorata-book-cli")]
#[command(version = "0.1", about = "A demo of a pro-rata limit order book")]
struct Args {
    /// The one instrument this book trades.
    #[arg(long, default_value = "SYM")]
    symbol: String,
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("set global tracing subscriber");

    let args = Args::parse();
    let mut book = Book::new(args.symbol.clone());
    tracing::info!(symbol = %args.symbol, "book opened");

    println!(
        "prorata-book-cli: {} -- commands: add <id> <trader> <buy|sell> <price> <size> | cancel <id> | book | quit",
        args.symbol
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break; // EOF
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        match cli::parse_line(&words) {
            Ok(command) => {
                if !cli::dispatch(&mut book, command) {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }
}
