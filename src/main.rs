//! CLI entry point for cardwall
//!
//! Provides a command-line interface for checking board files,
//! listing their cards, and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use cardwall::core::{parser::parse_board_file, validator::validate_board};
use cardwall::ui::App;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardwall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a board file for structural problems
    Check {
        /// Path to the board file
        #[arg(short, long, default_value = "~/.config/cardwall/board.cards")]
        board: PathBuf,
    },

    /// List all groups and cards
    List {
        /// Path to the board file
        #[arg(short, long, default_value = "~/.config/cardwall/board.cards")]
        board: PathBuf,
    },

    /// Launch the GUI
    Gui {
        /// Path to the board file
        #[arg(short, long, default_value = "~/.config/cardwall/board.cards")]
        board: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { board } => check_board(&board)?,
        Commands::List { board } => list_board(&board)?,
        Commands::Gui { board } => {
            let path = expand_path(&board)?;
            App::new(path)
                .map_err(|e| anyhow::anyhow!(e))?
                .run();
        }
    }

    Ok(())
}

/// Expand tilde in a user-supplied path
fn expand_path(path: &PathBuf) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Check a board file for parse errors and invariant violations
fn check_board(board_path: &PathBuf) -> anyhow::Result<()> {
    let path = expand_path(board_path)?;

    let content = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;

    println!("{} Parsing board: {}", "→".cyan(), path.display());

    let board = parse_board_file(&content, &path)?;

    println!(
        "{} Found {} groups, {} cards\n",
        "✓".green(),
        board.groups.len(),
        board.total_cards()
    );

    let violations = validate_board(&board);

    if violations.is_empty() {
        println!("{} {}", "✓".green().bold(), "No problems detected!".bold());
        println!("\nYour board is clean! ✓");
    } else {
        println!(
            "{} Found {} problem{}:\n",
            "✗".red().bold(),
            violations.len(),
            if violations.len() == 1 { "" } else { "s" }
        );

        for (i, violation) in violations.iter().enumerate() {
            println!(
                "  {} {}",
                format!("{}.", i + 1).dimmed(),
                violation.to_string().yellow()
            );
        }

        println!(
            "\n{}",
            "⚠ Fix these before the board can be loaded in the GUI!".yellow()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// List all groups and cards in the board
fn list_board(board_path: &PathBuf) -> anyhow::Result<()> {
    let path = expand_path(board_path)?;

    let content = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;

    let board = parse_board_file(&content, &path)?;

    println!("{}", format!("Board from: {}\n", path.display()).bold());

    let total = board.total_cards();

    for group in &board.groups {
        println!(
            "{} {}",
            format!("{}", group.title).cyan().bold(),
            format!("({})", group.id).dimmed()
        );

        for (index, card) in group.cards.iter().enumerate() {
            println!(
                "  {} {} {}",
                format!("{}.", index + 1).dimmed(),
                card.label,
                format!("[{}]", card.id).magenta()
            );
        }

        println!();
    }

    println!("{} Total: {} cards", "✓".green(), total);

    Ok(())
}
