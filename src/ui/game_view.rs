use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Settings;
use crate::game::{Board, Cell, GameState, Player, Status};
use crate::stats::{format_time, Stats};

pub fn render(
    frame: &mut Frame,
    game: &GameState,
    selected_column: usize,
    settings: &Settings,
    stats: &Stats,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board + stats
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(26)])
        .split(chunks[1]);

    render_header(frame, game, settings, chunks[0]);
    render_board(frame, game.board(), selected_column, middle[0]);
    render_stats(frame, game, stats, middle[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game: &GameState,
    settings: &Settings,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match game.status() {
        Status::Finished => ("Game Over".to_string(), Color::Cyan),
        _ => {
            let player = game.current_player();
            let color = match player {
                Player::Red => Color::Red,
                Player::Yellow => Color::Yellow,
            };
            (format!("Current Player: {}", player.name()), color)
        }
    };

    let text = format!(
        "{}  |  {}  |  AI: {}",
        status,
        settings.game_mode.name(),
        settings.ai_difficulty.name()
    );

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..7 {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..6 {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..7 {
            let cell = board.get(row, col);
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..7 {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_stats(frame: &mut Frame, game: &GameState, stats: &Stats, area: ratatui::layout::Rect) {
    let best = stats
        .best_time
        .map(format_time)
        .unwrap_or_else(|| "--:--".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled("Red", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(format!(" wins: {}", stats.player1_wins)),
        ]),
        Line::from(vec![
            Span::styled(
                "Yellow",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" wins: {}", stats.player2_wins)),
        ]),
        Line::from(format!("Games: {}", stats.games_played)),
        Line::from(format!(
            "Streak: {} (best {})",
            stats.win_streak, stats.longest_streak
        )),
        Line::from(format!("Best time: {best}")),
        Line::from(format!(
            "Time: {}",
            format_time(game.elapsed().as_secs_f64())
        )),
        Line::from(format!("Moves: {}", game.move_count())),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter: Drop  |  U: Undo  |  R: Restart  |  M: Mode  |  A: Difficulty  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
