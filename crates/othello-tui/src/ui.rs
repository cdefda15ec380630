use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::game::{square_name, Game, Screen, MAX_NAME_LEN};
use othello_core::{Cell, Outcome, Player, BOARD_SIZE};

// ── Constants ────────────────────────────────────────────────────────────────

// Row labels + 8 cells of width 3 with borders between them.
const GRID_WIDTH: u16 = 37;
const GRID_HEIGHT: u16 = 18;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    match game.screen {
        Screen::Menu => draw_menu(f),
        Screen::NameEntry => draw_name_entry(f, game),
        Screen::Playing => draw_playing(f, game),
        Screen::GameOver => draw_game_over(f, game),
    }

    if game.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

// ── Menu screen ──────────────────────────────────────────────────────────────

fn draw_menu(f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Min(0),
    ])
    .split(center_rect(64, 20, area));

    let title_lines = vec![
        Line::from(Span::styled(
            r" ██████╗ ████████╗██╗  ██╗███████╗██╗     ██╗      ██████╗ ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"██╔═══██╗╚══██╔══╝██║  ██║██╔════╝██║     ██║     ██╔═══██╗",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"██║   ██║   ██║   ███████║█████╗  ██║     ██║     ██║   ██║",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"██║   ██║   ██║   ██╔══██║██╔══╝  ██║     ██║     ██║   ██║",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"╚██████╔╝   ██║   ██║  ██║███████╗███████╗███████╗╚██████╔╝",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r" ╚═════╝    ╚═╝   ╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝ ╚═════╝ ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let title = Paragraph::new(title_lines).alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let controls = Paragraph::new(vec![
        Line::from(Span::styled(
            "Two players, one board.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled("  Start game", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled("      Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[3]);
}

// ── Name entry screen ────────────────────────────────────────────────────────

fn draw_name_entry(f: &mut Frame, game: &Game) {
    let area = f.area();
    let popup = center_rect(44, 14, area);

    let bg = Paragraph::new("").style(Style::default().bg(Color::Black));
    f.render_widget(bg, area);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Players ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Green));

    let mut lines = vec![Line::from("")];

    for (idx, player) in [Player::Dark, Player::Light].iter().enumerate() {
        let active = idx == game.editing_name;
        let marker = if active { "▸ " } else { "  " };
        let glyph = match player {
            Player::Dark => "●",
            Player::Light => "○",
        };
        let used = game.names[idx].chars().count();
        let field = format!(
            "{}{}",
            game.names[idx],
            "_".repeat(MAX_NAME_LEN.saturating_sub(used))
        );
        let field_style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(Span::styled(
            format!(" {}{} {}:", marker, glyph, player.label()),
            Style::default().fg(Color::White),
        )));
        lines.push(Line::from(Span::styled(format!("    {}", field), field_style)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        " Blank fields keep the color name.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tab switch · Enter start · Esc back",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup);
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let area = f.area();

    let outer = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
    let main_area = outer[0];
    let bottom_area = outer[1];

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH + 2),
        Constraint::Length(2),
        Constraint::Length(28),
        Constraint::Min(0),
    ])
    .split(main_area);

    let grid_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT + 2),
        Constraint::Min(0),
    ])
    .split(h_chunks[1]);

    draw_grid(f, game, grid_v[1]);

    let panel_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(16),
        Constraint::Min(0),
    ])
    .split(h_chunks[3]);

    draw_score_panel(f, game, panel_v[1]);

    draw_key_hints(f, bottom_area);
}

// ── Grid rendering ───────────────────────────────────────────────────────────

fn draw_grid(f: &mut Frame, game: &Game, area: Rect) {
    // Legal-move markers only matter while a move is being chosen; they are
    // recomputed from the live board every frame.
    let legal = if game.screen == Screen::Playing {
        game.legal_moves()
    } else {
        Vec::new()
    };

    let mut lines: Vec<Line> = Vec::with_capacity(GRID_HEIGHT as usize);

    lines.push(Line::from(Span::styled(
        "    a   b   c   d   e   f   g   h",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(border_line('┌', '┬', '┐'));

    for row in 0..BOARD_SIZE {
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            format!("{} ", row + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled("│", Style::default().fg(Color::White)));
        for col in 0..BOARD_SIZE {
            spans.push(cell_span(game, &legal, row, col));
            spans.push(Span::styled("│", Style::default().fg(Color::White)));
        }
        lines.push(Line::from(spans));

        if row < BOARD_SIZE - 1 {
            lines.push(border_line('├', '┼', '┤'));
        }
    }

    lines.push(border_line('└', '┴', '┘'));

    let block = Block::bordered()
        .title(" Board ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let grid_paragraph = Paragraph::new(lines).block(block);
    f.render_widget(grid_paragraph, area);
}

fn cell_span(game: &Game, legal: &[(usize, usize)], row: usize, col: usize) -> Span<'static> {
    let is_selected =
        game.screen == Screen::Playing && row == game.selected_row && col == game.selected_col;
    let bg = if is_selected { Color::Yellow } else { Color::Green };

    match game.board[row][col] {
        Cell::Dark => Span::styled(
            " ● ",
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Light => Span::styled(
            " ● ",
            Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Empty => {
            if legal.contains(&(row, col)) {
                Span::styled(" · ", Style::default().fg(Color::DarkGray).bg(bg))
            } else {
                Span::styled("   ", Style::default().bg(bg))
            }
        }
    }
}

fn border_line(left: char, cross: char, right: char) -> Line<'static> {
    let mut s = String::with_capacity(40);
    s.push_str("  ");
    s.push(left);
    for col in 0..BOARD_SIZE {
        s.push_str("───");
        if col < BOARD_SIZE - 1 {
            s.push(cross);
        }
    }
    s.push(right);

    Line::from(Span::styled(s, Style::default().fg(Color::DarkGray)))
}

// ── Score panel ──────────────────────────────────────────────────────────────

fn draw_score_panel(f: &mut Frame, game: &Game, area: Rect) {
    let block = Block::bordered()
        .title(" Score ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let (dark, light) = game.scores();

    let mut lines = vec![
        Line::from(""),
        score_line(game, Player::Dark, dark),
        Line::from(""),
        score_line(game, Player::Light, light),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Cursor: ", Style::default().fg(Color::Gray)),
            Span::styled(
                square_name(game.selected_row, game.selected_col),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(ref status) = game.status {
        lines.push(Line::from(Span::styled(
            format!(" {}", status),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn score_line(game: &Game, player: Player, count: u8) -> Line<'static> {
    let to_move = game.screen == Screen::Playing && game.current == player;
    let marker = if to_move { "▸" } else { " " };
    let glyph = match player {
        Player::Dark => "●",
        Player::Light => "○",
    };
    let name_style = if to_move {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{} ", glyph), Style::default().fg(Color::White)),
        Span::styled(format!("{:<12}", game.name_of(player)), name_style),
        Span::styled(format!("{:>3}", count), Style::default().fg(Color::White)),
    ])
}

// ── Game over screen ─────────────────────────────────────────────────────────

fn draw_game_over(f: &mut Frame, game: &Game) {
    draw_playing_backdrop(f, game);

    let area = f.area();
    let popup = center_rect(40, 13, area);
    f.render_widget(Clear, popup);

    let (headline, color) = match game.outcome {
        Some(Outcome::Win(player)) => (format!("{} wins!", game.name_of(player)), Color::Green),
        Some(Outcome::Tie) => ("It's a tie".to_string(), Color::Yellow),
        None => ("Game over".to_string(), Color::White),
    };

    let block = Block::bordered()
        .title(" Game Over ")
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));

    let (dark, light) = game.scores();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ● ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{:<12}", game.name_of(Player::Dark)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("{:>3}", dark), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  ○ ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{:<12}", game.name_of(Player::Light)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("{:>3}", light), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::styled(" Rematch  ", Style::default().fg(Color::Gray)),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Menu  ", Style::default().fg(Color::Gray)),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

/// The final board stays visible behind the game-over popup.
fn draw_playing_backdrop(f: &mut Frame, game: &Game) {
    let area = f.area();

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH + 2),
        Constraint::Min(0),
    ])
    .split(area);

    let grid_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT + 2),
        Constraint::Min(0),
    ])
    .split(h_chunks[1]);

    draw_grid(f, game, grid_v[1]);
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Move cursor  ", Style::default().fg(Color::Gray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Place piece  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ── Quit confirmation dialog ─────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(36, 7, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Abandon the game and quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Y",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("/", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Any key",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}
