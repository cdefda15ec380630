use othello_core::{
    count_pieces, determine_winner, get_valid_moves, initial_board, is_valid_move, make_move,
    Board, Outcome, Player, BOARD_SIZE,
};

/// Play each side's first legal move until one side is stuck, alternating
/// turns like an interface would. Returns the board and the ply count.
fn play_greedy_opening(plies: usize) -> (Board, usize) {
    let mut board = initial_board();
    let mut player = Player::Dark;
    let mut played = 0;

    for _ in 0..plies {
        let moves = get_valid_moves(&board, player);
        let Some(&(row, col)) = moves.first() else {
            break;
        };
        assert!(make_move(&mut board, player, row, col));
        player = player.opponent();
        played += 1;
    }

    (board, played)
}

#[test]
fn alternating_play_from_the_opening_stays_consistent() {
    let (board, played) = play_greedy_opening(12);
    assert_eq!(played, 12);

    let (dark, light) = count_pieces(&board);
    // One piece enters the board per ply; flips never change the total.
    assert_eq!(dark + light, 4 + 12);
}

#[test]
fn enumerated_moves_are_exactly_the_valid_ones_throughout_a_game() {
    let mut board = initial_board();
    let mut player = Player::Dark;

    for _ in 0..20 {
        let moves = get_valid_moves(&board, player);

        let mut expected = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if is_valid_move(&board, player, row, col) {
                    expected.push((row, col));
                }
            }
        }
        assert_eq!(moves, expected);

        let Some(&(row, col)) = moves.first() else {
            break;
        };
        assert!(make_move(&mut board, player, row, col));
        player = player.opponent();
    }
}

#[test]
fn every_enumerated_move_is_playable() {
    let (board, _) = play_greedy_opening(8);

    for player in [Player::Dark, Player::Light] {
        for (row, col) in get_valid_moves(&board, player) {
            let mut copy = board;
            assert!(
                make_move(&mut copy, player, row, col),
                "enumerated move ({row}, {col}) was rejected"
            );
            assert_eq!(copy[row][col], player.cell());
        }
    }
}

#[test]
fn winner_can_be_queried_mid_game() {
    let mut board = initial_board();
    assert_eq!(determine_winner(&board), Outcome::Tie);

    // The first move always puts the mover ahead 4-1.
    assert!(make_move(&mut board, Player::Dark, 2, 3));
    assert_eq!(determine_winner(&board), Outcome::Win(Player::Dark));
}
