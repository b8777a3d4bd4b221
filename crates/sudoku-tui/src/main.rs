mod app;
mod render;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use sudoku_engine::{Board, Solver};

/// Interactive Sudoku board with backtracking solve and random fill
#[derive(Parser)]
#[command(name = "sudoku", version, about)]
struct Args {
    /// Preload a puzzle as 81 characters, '0' or '.' for vacant cells
    #[arg(long)]
    puzzle: Option<String>,

    /// Solve the preloaded puzzle and print it without entering the UI
    #[arg(long, requires = "puzzle")]
    solve: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.solve {
        let puzzle = args.puzzle.expect("--solve requires --puzzle");
        return solve_and_print(&puzzle);
    }

    let app = match args.puzzle.as_deref() {
        Some(puzzle) => match App::with_puzzle(puzzle) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => App::new(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            match app.handle_key(key.code) {
                AppAction::Continue => {}
                AppAction::Quit => break,
            }
        }
    }

    Ok(())
}

/// Non-interactive mode: parse, validate, solve, print to stdout.
fn solve_and_print(puzzle: &str) -> io::Result<()> {
    let mut board = match Board::from_string(puzzle) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    match Solver::new().solve_checked(&mut board) {
        Ok(true) => {
            println!("{}", board);
            Ok(())
        }
        Ok(false) => {
            println!("No solution exists.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
