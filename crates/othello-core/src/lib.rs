pub mod board;
pub mod rules;

pub use board::{count_pieces, initial_board, Board, Cell, Player, BOARD_SIZE};
pub use rules::{
    determine_winner, get_valid_moves, is_on_board, is_valid_move, make_move, Outcome, DIRECTIONS,
};
