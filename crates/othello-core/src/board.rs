use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two sides. `Dark` moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Player::Dark => "Dark",
            Player::Light => "Light",
        }
    }
}

pub const BOARD_SIZE: usize = 8;

pub type Board = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Standard starting position:
/// d4=light, e4=dark, d5=dark, e5=light.
pub fn initial_board() -> Board {
    let mut board = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    board[3][3] = Cell::Light;
    board[3][4] = Cell::Dark;
    board[4][3] = Cell::Dark;
    board[4][4] = Cell::Light;
    board
}

/// Returns `(dark_count, light_count)`.
pub fn count_pieces(board: &Board) -> (u8, u8) {
    let mut dark = 0;
    let mut light = 0;
    for row in board {
        for cell in row {
            match cell {
                Cell::Dark => dark += 1,
                Cell::Light => light += 1,
                Cell::Empty => {}
            }
        }
    }
    (dark, light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_two_pieces_per_side() {
        let board = initial_board();
        assert_eq!(count_pieces(&board), (2, 2));
        assert_eq!(board[3][3], Cell::Light);
        assert_eq!(board[3][4], Cell::Dark);
        assert_eq!(board[4][3], Cell::Dark);
        assert_eq!(board[4][4], Cell::Light);
    }

    #[test]
    fn counts_and_empties_total_sixty_four() {
        let board = initial_board();
        let (dark, light) = count_pieces(&board);
        let empties = board
            .iter()
            .flatten()
            .filter(|c| c.is_empty())
            .count() as u8;
        assert_eq!(dark + light + empties, 64);
    }

    #[test]
    fn opponent_is_involutive() {
        assert_eq!(Player::Dark.opponent(), Player::Light);
        assert_eq!(Player::Light.opponent().opponent(), Player::Light);
    }
}
