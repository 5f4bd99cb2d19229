//! Tests for the three move-selection policies.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_miniapp::ai::{heuristic, minimax};
use tictactoe_miniapp::{Board, Difficulty, Mark, Position, Square, select_move, simulate};

fn board_from(marks: &[(usize, Mark)]) -> Board {
    let mut board = Board::new();
    for (index, mark) in marks {
        board.set(Position::from_index(*index).unwrap(), Square::Taken(*mark));
    }
    board
}

#[test]
fn test_minimax_answers_corner_opening_with_center() {
    // X opens in the corner; the center is the unique non-losing reply.
    let mut board = board_from(&[(0, Mark::X)]);
    let result = minimax::best_move(&mut board, Mark::O);
    assert_eq!(result.position, Some(Position::Center));
}

#[test]
fn test_minimax_restores_the_board() {
    let mut board = board_from(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    let snapshot = board.clone();
    minimax::best_move(&mut board, Mark::O);
    assert_eq!(board, snapshot);
}

#[test]
fn test_minimax_tie_break_prefers_lowest_index() {
    // An empty board scores 0 for every reply under perfect play, so the
    // first-encountered cell must win the tie-break.
    let mut board = Board::new();
    let result = minimax::best_move(&mut board, Mark::X);
    assert_eq!(result.score, 0);
    assert_eq!(result.position, Some(Position::TopLeft));
}

#[test]
fn test_medium_completes_own_line_before_blocking() {
    // X X _ / O O _ / _ _ _ with O to move. O must finish 3-4-5 at
    // index 5, not block X's 0-1-2 at index 2.
    let board = board_from(&[(0, Mark::X), (1, Mark::X), (3, Mark::O), (4, Mark::O)]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        heuristic::tactical_move(&board, Mark::O, &mut rng),
        Some(Position::MiddleRight)
    );
}

#[test]
fn test_medium_blocks_when_it_cannot_win() {
    let board = board_from(&[(0, Mark::X), (1, Mark::X), (4, Mark::O)]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        heuristic::tactical_move(&board, Mark::O, &mut rng),
        Some(Position::TopRight)
    );
}

#[test]
fn test_easy_with_single_empty_square_returns_it() {
    let board = board_from(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::O),
        (5, Mark::X),
        (6, Mark::O),
        (7, Mark::X),
        (8, Mark::O),
    ]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        assert_eq!(
            select_move(&board, Mark::X, Difficulty::Easy, &mut rng),
            Some(Position::Center)
        );
    }
}

#[test]
fn test_hard_never_loses_as_o() {
    let mut rng = StdRng::seed_from_u64(42);

    let tally = simulate::run(Difficulty::Easy, Difficulty::Hard, 25, &mut rng);
    assert_eq!(tally.x_wins, 0, "random X beat the search: {tally}");

    let tally = simulate::run(Difficulty::Medium, Difficulty::Hard, 10, &mut rng);
    assert_eq!(tally.x_wins, 0, "heuristic X beat the search: {tally}");
}

#[test]
fn test_hard_never_loses_as_x() {
    let mut rng = StdRng::seed_from_u64(42);
    let tally = simulate::run(Difficulty::Hard, Difficulty::Easy, 25, &mut rng);
    assert_eq!(tally.o_wins, 0, "random O beat the search: {tally}");
}

#[test]
fn test_hard_mirror_match_always_ties() {
    let mut rng = StdRng::seed_from_u64(42);
    let tally = simulate::run(Difficulty::Hard, Difficulty::Hard, 3, &mut rng);
    assert_eq!(tally.ties, 3);
}
