use clap::{Parser, Subcommand, builder::PossibleValuesParser};
use prorata_book::Book;

/// Interactive shell for a single [`Book`]. Each line is parsed as one of
/// [`Commands`] and dispatched against the book bound at startup, mirroring
/// the teacher's `clap`-derived `Add`/`Match`/`Book` subcommands but kept
/// alive across lines instead of exiting after one invocation, since the
/// book this crate drives is a single long-lived resting structure rather
/// than a fresh one per process.
#[derive(Parser)]
#[command(name = "prorata_book_cli", no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new limit order.
    Add {
        /// Order id, must be unique for the life of the book.
        id: u64,
        /// Opaque trader label.
        trader: String,
        #[arg(value_parser = PossibleValuesParser::new(["buy", "sell"]))]
        side: String,
        /// Limit price (non-negative integer).
        price: i32,
        /// Size (positive integer).
        size: i32,
    },
    /// Cancel a resting order by id.
    Cancel { id: u64 },
    /// Print the current order book.
    Book,
    /// Exit the shell.
    Quit,
}

/// Parses one REPL line (already split into words) into a [`Commands`].
pub fn parse_line(words: &[&str]) -> Result<Commands, clap::Error> {
    Line::try_parse_from(words).map(|l| l.command)
}

/// Applies one parsed command to `book`, printing output the way the
/// teacher's `handle_add`/`handle_match`/`print_order_book` do.
pub fn dispatch(book: &mut Book, command: Commands) -> bool {
    match command {
        Commands::Add { id, trader, side, price, size } => {
            let is_buy = side == "buy";
            let symbol = book.symbol().to_string();
            match book.add_order(id, trader, symbol, size, is_buy, price) {
                Ok(trades) => {
                    if trades.is_empty() {
                        println!("order {id} rested, no trades");
                    } else {
                        for t in &trades {
                            println!("{t}");
                        }
                    }
                }
                Err(e) => println!("rejected: {e}"),
            }
            true
        }
        Commands::Cancel { id } => {
            if book.cancel(id) {
                println!("order {id} cancelled");
            } else {
                println!("order {id} not found");
            }
            true
        }
        Commands::Book => {
            print!("{}", book.snapshot());
            true
        }
        Commands::Quit => false,
    }
}
