//! Baller Up admin CLI.
//!
//! Provides the `ballerup` binary for court-side administration of the
//! queue database without going through the HTTP server: list the queue,
//! join or remove participants, serve the next player, and read or set the
//! scoreboard.
//!
//! Operates on the same SQLite file as the server via the same storage
//! crate, so semantics (normalization, dense positions, case-insensitive
//! names) are identical from both entry points.

use std::process;

use clap::{Parser, Subcommand};

use ballerup_storage::{QueueStore, ScoreStore, SqliteStore};

/// Baller Up queue administration.
#[derive(Parser)]
#[command(name = "ballerup", about = "Baller Up queue administration")]
struct Cli {
    /// Path to the queue database file.
    #[arg(short, long, default_value = "ballerup.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the queue in serving order, with positions.
    List,

    /// Add a participant to the back of the queue.
    Join {
        /// Participant name (whitespace is normalized).
        name: String,
    },

    /// Remove a participant by name (case-insensitive).
    Leave {
        /// Participant name.
        name: String,
    },

    /// Serve the participant at the front of the queue.
    Next,

    /// Show the scoreboard, optionally updating either counter first.
    Scores {
        /// New value for the "good" counter.
        #[arg(long)]
        good: Option<i64>,

        /// New value for the "bad" counter.
        #[arg(long)]
        bad: Option<i64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut store = match SqliteStore::new(&cli.db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", cli.db, e);
            process::exit(2);
        }
    };

    let exit_code = match cli.command {
        Commands::List => run_list(&store),
        Commands::Join { name } => run_join(&mut store, &name),
        Commands::Leave { name } => run_leave(&mut store, &name),
        Commands::Next => run_next(&mut store),
        Commands::Scores { good, bad } => run_scores(&mut store, good, bad),
    };
    process::exit(exit_code);
}

/// Prints the queue with positions. Exit code: 0 = success, 1 = error.
fn run_list(store: &SqliteStore) -> i32 {
    match store.entries() {
        Ok(entries) if entries.is_empty() => {
            println!("(queue is empty)");
            0
        }
        Ok(entries) => {
            for entry in entries {
                println!("{:>3}. {}", entry.position, entry.name);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_join(store: &mut SqliteStore, name: &str) -> i32 {
    match store.join(name) {
        Ok(queue) => {
            println!("Joined. Queue: {}", queue.join(", "));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_leave(store: &mut SqliteStore, name: &str) -> i32 {
    match store.leave(name) {
        Ok(queue) if queue.is_empty() => {
            println!("Removed. Queue is now empty.");
            0
        }
        Ok(queue) => {
            println!("Removed. Queue: {}", queue.join(", "));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_next(store: &mut SqliteStore) -> i32 {
    match store.advance() {
        Ok(outcome) => {
            match outcome.next {
                Some(name) => println!("Up next: {}", name),
                None => println!("Queue is empty."),
            }
            if !outcome.queue.is_empty() {
                println!("Waiting: {}", outcome.queue.join(", "));
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_scores(store: &mut SqliteStore, good: Option<i64>, bad: Option<i64>) -> i32 {
    let result = if good.is_some() || bad.is_some() {
        store.set_scoreboard(good, bad)
    } else {
        store.scoreboard()
    };
    match result {
        Ok(board) => {
            println!("good: {}  bad: {}", board.good, board.bad);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
