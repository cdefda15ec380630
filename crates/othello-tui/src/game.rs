use othello_core::{
    count_pieces, determine_winner, get_valid_moves, initial_board, make_move, Board, Outcome,
    Player, BOARD_SIZE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    NameEntry,
    Playing,
    GameOver,
}

pub const MAX_NAME_LEN: usize = 12;

/// Interface-layer state: the engine's board plus everything the terminal
/// front end tracks on top of it (whose turn it is, cursor, name buffers).
pub struct Game {
    pub board: Board,
    pub current: Player,
    pub screen: Screen,
    pub selected_row: usize,
    pub selected_col: usize,
    /// Name buffers, indexed Dark = 0, Light = 1.
    pub names: [String; 2],
    pub editing_name: usize,
    /// One-line feedback: illegal move, forced pass. Cleared on the next
    /// successful action.
    pub status: Option<String>,
    pub outcome: Option<Outcome>,
    pub show_quit_confirm: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: initial_board(),
            current: Player::Dark,
            screen: Screen::Menu,
            selected_row: 3,
            selected_col: 3,
            names: [String::new(), String::new()],
            editing_name: 0,
            status: None,
            outcome: None,
            show_quit_confirm: false,
        }
    }

    pub fn start_name_entry(&mut self) {
        self.screen = Screen::NameEntry;
        self.editing_name = 0;
    }

    pub fn start_new_game(&mut self) {
        self.board = initial_board();
        self.current = Player::Dark;
        self.selected_row = 3;
        self.selected_col = 3;
        self.status = None;
        self.outcome = None;
        self.show_quit_confirm = false;
        self.screen = Screen::Playing;
    }

    /// Display name for a side, falling back to the color when the field
    /// was left blank.
    pub fn name_of(&self, player: Player) -> &str {
        let idx = match player {
            Player::Dark => 0,
            Player::Light => 1,
        };
        let name = self.names[idx].trim();
        if name.is_empty() {
            player.label()
        } else {
            name
        }
    }

    pub fn push_name_char(&mut self, c: char) {
        let buf = &mut self.names[self.editing_name];
        if buf.chars().count() < MAX_NAME_LEN && (c.is_alphanumeric() || c == ' ') {
            buf.push(c);
        }
    }

    pub fn pop_name_char(&mut self) {
        self.names[self.editing_name].pop();
    }

    pub fn toggle_name_field(&mut self) {
        self.editing_name = 1 - self.editing_name;
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        let size = BOARD_SIZE as i32;
        self.selected_row = (self.selected_row as i32 + dr).rem_euclid(size) as usize;
        self.selected_col = (self.selected_col as i32 + dc).rem_euclid(size) as usize;
    }

    /// Attempt the move under the cursor for the player to move. An illegal
    /// target leaves the board untouched and only sets a status message.
    pub fn play_selected(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }

        let (row, col) = (self.selected_row, self.selected_col);
        if make_move(&mut self.board, self.current, row, col) {
            self.status = None;
            self.advance_turn();
        } else {
            self.status = Some(format!(
                "{} cannot play at {}",
                self.name_of(self.current),
                square_name(row, col)
            ));
        }
    }

    /// Turn handoff after a successful move: the opponent moves next unless
    /// they are stuck, in which case the turn passes back; when both sides
    /// are stuck the game is over.
    pub fn advance_turn(&mut self) {
        let next = self.current.opponent();
        if !get_valid_moves(&self.board, next).is_empty() {
            self.current = next;
        } else if !get_valid_moves(&self.board, self.current).is_empty() {
            self.status = Some(format!(
                "{} has no legal move and passes",
                self.name_of(next)
            ));
        } else {
            self.outcome = Some(determine_winner(&self.board));
            self.screen = Screen::GameOver;
        }
    }

    /// Returns `(dark_count, light_count)`.
    pub fn scores(&self) -> (u8, u8) {
        count_pieces(&self.board)
    }

    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        get_valid_moves(&self.board, self.current)
    }
}

/// Algebraic square name, `a1` = top-left.
pub fn square_name(row: usize, col: usize) -> String {
    format!("{}{}", (b'a' + col as u8) as char, row + 1)
}
