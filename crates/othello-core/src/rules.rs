use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, BOARD_SIZE};

/// The eight unit vectors used for directional scans.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// End-of-game outcome: a strict-majority winner, or a tie on equal counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Tie,
}

/// Check whether `(row, col)` lies on the 8×8 board (inclusive `[0, 7]`).
pub fn is_on_board(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// The shared scan primitive: walk outward from `(row, col)` along one
/// direction and return the run of opponent cells that would be captured.
/// Empty when the run is unbounded (hits an empty cell or the board edge)
/// or no opponent cell is crossed at all.
fn captures_in_direction(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    (dr, dc): (i32, i32),
) -> Vec<(usize, usize)> {
    let own = player.cell();
    let opponent = player.opponent().cell();

    let mut run = Vec::new();
    let mut r = row as i32 + dr;
    let mut c = col as i32 + dc;

    while is_on_board(r, c) && board[r as usize][c as usize] == opponent {
        run.push((r as usize, c as usize));
        r += dr;
        c += dc;
    }

    if !run.is_empty() && is_on_board(r, c) && board[r as usize][c as usize] == own {
        run
    } else {
        Vec::new()
    }
}

/// Check whether placing `player`'s piece at `(row, col)` captures at least
/// one opponent run. Never mutates the board. Out-of-range targets are
/// rejected rather than faulting.
pub fn is_valid_move(board: &Board, player: Player, row: usize, col: usize) -> bool {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return false;
    }
    if !board[row][col].is_empty() {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&dir| !captures_in_direction(board, player, row, col, dir).is_empty())
}

/// All legal target cells for `player`, in row-major order. Computed fresh
/// on every call.
pub fn get_valid_moves(board: &Board, player: Player) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if is_valid_move(board, player, row, col) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// Place `player`'s piece at `(row, col)` and flip every captured run.
/// Returns false and leaves the board untouched when the move is illegal.
/// The sole mutator of board state.
pub fn make_move(board: &mut Board, player: Player, row: usize, col: usize) -> bool {
    if !is_valid_move(board, player, row, col) {
        return false;
    }

    board[row][col] = player.cell();
    for dir in DIRECTIONS {
        // The placed piece only anchors runs; it never extends one, so the
        // outward scans see the same runs validation did.
        for (r, c) in captures_in_direction(board, player, row, col, dir) {
            board[r][c] = player.cell();
        }
    }

    true
}

/// Count both sides and return the strict-majority winner, or `Tie`.
pub fn determine_winner(board: &Board) -> Outcome {
    let (dark, light) = crate::board::count_pieces(board);
    if dark > light {
        Outcome::Win(Player::Dark)
    } else if light > dark {
        Outcome::Win(Player::Light)
    } else {
        Outcome::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{count_pieces, initial_board, Cell};

    /// Build a board from eight rows of `.` / `D` / `L`.
    fn board_from_rows(rows: [&str; 8]) -> Board {
        let mut board = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                board[r][c] = match ch {
                    'D' => Cell::Dark,
                    'L' => Cell::Light,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    #[test]
    fn board_bounds_are_inclusive_zero_to_seven() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(7, 7));
        assert!(!is_on_board(-1, 0));
        assert!(!is_on_board(0, 8));
    }

    #[test]
    fn opening_moves_for_dark_are_the_four_standard_squares() {
        let board = initial_board();
        assert_eq!(
            get_valid_moves(&board, Player::Dark),
            vec![(2, 3), (3, 2), (4, 5), (5, 4)]
        );
    }

    #[test]
    fn occupied_target_is_invalid() {
        let board = initial_board();
        assert!(!is_valid_move(&board, Player::Dark, 3, 3));
        assert!(!is_valid_move(&board, Player::Light, 3, 4));
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        let board = initial_board();
        assert!(!is_valid_move(&board, Player::Dark, 8, 0));
        assert!(!is_valid_move(&board, Player::Dark, 0, 64));
    }

    #[test]
    fn isolated_placement_is_invalid() {
        let board = initial_board();
        // All eight neighbors of (0, 0) are empty or off-board.
        assert!(!is_valid_move(&board, Player::Dark, 0, 0));

        let empty = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        assert!(get_valid_moves(&empty, Player::Dark).is_empty());
    }

    #[test]
    fn run_reaching_the_edge_without_an_anchor_is_invalid() {
        let board = board_from_rows([
            ".LLLLLLL", // no Dark piece bounds this run
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!is_valid_move(&board, Player::Dark, 0, 0));
    }

    #[test]
    fn validation_never_mutates_the_board() {
        let board = initial_board();
        let before = board;
        assert!(is_valid_move(&board, Player::Dark, 2, 3));
        assert!(is_valid_move(&board, Player::Dark, 2, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn make_move_flips_the_captured_run() {
        let mut board = initial_board();

        assert!(make_move(&mut board, Player::Dark, 2, 3));

        assert_eq!(board[2][3], Cell::Dark);
        assert_eq!(board[3][3], Cell::Dark);
        assert_eq!(board[4][4], Cell::Light); // outside the run, unchanged
        assert_eq!(count_pieces(&board), (4, 1));
    }

    #[test]
    fn make_move_flips_every_capturing_direction() {
        let mut board = board_from_rows([
            "........",
            "........",
            "...LD...",
            "..LL....",
            "..D.D...",
            "........",
            "........",
            "........",
        ]);

        assert!(make_move(&mut board, Player::Dark, 2, 2));

        // East, south, and south-east runs all flip; nothing else moves.
        assert_eq!(board[2][2], Cell::Dark);
        assert_eq!(board[2][3], Cell::Dark);
        assert_eq!(board[3][2], Cell::Dark);
        assert_eq!(board[3][3], Cell::Dark);
        assert_eq!(count_pieces(&board), (7, 0));
    }

    #[test]
    fn rejected_move_leaves_the_board_unchanged() {
        let mut board = initial_board();
        let before = board;

        assert!(!make_move(&mut board, Player::Dark, 0, 0));
        assert_eq!(board, before);

        assert!(!make_move(&mut board, Player::Dark, 3, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn light_replies_after_the_first_dark_move() {
        let mut board = initial_board();
        assert!(make_move(&mut board, Player::Dark, 2, 3));

        assert_eq!(
            get_valid_moves(&board, Player::Light),
            vec![(2, 2), (2, 4), (4, 2)]
        );
    }

    #[test]
    fn valid_moves_agree_with_validation_over_every_cell() {
        let mut board = initial_board();
        assert!(make_move(&mut board, Player::Dark, 2, 3));
        assert!(make_move(&mut board, Player::Light, 2, 2));

        for player in [Player::Dark, Player::Light] {
            let mut expected = Vec::new();
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    if is_valid_move(&board, player, row, col) {
                        expected.push((row, col));
                    }
                }
            }
            assert_eq!(get_valid_moves(&board, player), expected);
        }
    }

    #[test]
    fn winner_requires_a_strict_majority() {
        assert_eq!(determine_winner(&initial_board()), Outcome::Tie);

        // Full board, 33 dark / 31 light.
        let mut board = [[Cell::Dark; BOARD_SIZE]; BOARD_SIZE];
        for row in 0..4 {
            for col in 0..BOARD_SIZE {
                board[row][col] = Cell::Light;
            }
        }
        board[0][0] = Cell::Dark;
        assert_eq!(count_pieces(&board), (33, 31));
        assert_eq!(determine_winner(&board), Outcome::Win(Player::Dark));
    }
}
