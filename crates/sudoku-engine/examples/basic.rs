//! Basic example of using the Sudoku engine

use sudoku_engine::{Board, Randomizer, Solver};

fn main() {
    // Parse a puzzle from a string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let mut board = Board::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle ({} clues):", board.given_count());
    println!("{}", board);

    // Solve it in place
    let solver = Solver::new();
    if solver.solve(&mut board) {
        println!("Solution:");
        println!("{}", board);
    } else {
        println!("No solution exists for this puzzle.");
    }

    // Fill an empty board with randomly ordered digits. The fill is
    // greedy, so some cells may stay vacant.
    let mut random_board = Board::new();
    Randomizer::new().fill(&mut random_board, &mut rand::thread_rng());

    println!(
        "Random board ({} of 81 cells filled):",
        random_board.given_count()
    );
    println!("{}", random_board);
}
