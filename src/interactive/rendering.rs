//! TUI rendering with ratatui
//!
//! Board editors on top, solution browser below.

use super::app::{App, GridFocus, InputMode, MessageStyle};
use super::editor::GridEditor;
use crate::output::formatters::move_arrow;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(11), // Editors
            Constraint::Min(10),    // Solution and messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let editor_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_editor(f, app, GridFocus::Initial, editor_chunks[0]);
    render_editor(f, app, GridFocus::Goal, editor_chunks[1]);

    let lower_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Solution
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[2]);

    render_solution(f, app, lower_chunks[0]);
    render_info_panel(f, app, lower_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 8-PUZZLE SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Grid lines for a board-like cell accessor, highlighting one cell if given
fn grid_lines(
    size: usize,
    cell: impl Fn(usize, usize) -> u8,
    highlight: Option<(usize, usize)>,
) -> Vec<Line<'static>> {
    let width = if size > 3 { 2 } else { 1 };
    let separator = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(size));

    let mut lines = vec![Line::from(separator.clone())];
    for row in 0..size {
        let mut spans = vec![Span::raw("|")];
        for col in 0..size {
            let value = cell(row, col);
            let text = if value == 0 {
                format!(" {:>width$} ", "·")
            } else {
                format!(" {value:>width$} ")
            };
            let style = if highlight == Some((row, col)) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if value == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("|"));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(separator.clone()));
    }
    lines
}

fn render_editor(f: &mut Frame, app: &App, which: GridFocus, area: Rect) {
    let (grid, title): (&GridEditor, &str) = match which {
        GridFocus::Initial => (&app.initial, " Initial State "),
        GridFocus::Goal => (&app.goal, " Goal State "),
    };

    let active = app.input_mode == InputMode::Editing && app.focus == which;
    let highlight = active.then_some(app.cursor);
    let border_color = if active { Color::Yellow } else { Color::Gray };

    let paragraph = Paragraph::new(grid_lines(grid.size(), |r, c| grid.get(r, c), highlight))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(if active {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .style(Style::default().fg(border_color)),
        );
    f.render_widget(paragraph, area);
}

fn render_solution(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Solution ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Green));

    let Some(step) = app.solution.get(app.step_index) else {
        let paragraph = Paragraph::new("No solution yet. Press 's' to solve.").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut content = vec![Line::from(vec![
        Span::styled(
            format!("Step {}", app.step_index + 1),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" of {}", app.solution.len())),
        Span::raw(match step.mv {
            Some(mv) => format!("   blank moved {} {mv}", move_arrow(mv)),
            None => "   initial state".to_string(),
        }),
    ])];
    content.push(Line::from(""));
    content.extend(grid_lines(
        step.board.size(),
        |r, c| step.board.get(r, c),
        None,
    ));

    let moves: Vec<String> = app
        .solution
        .iter()
        .filter_map(|s| s.mv)
        .map(|mv| move_arrow(mv).to_string())
        .collect();
    content.push(Line::from(""));
    content.push(Line::from(format!("Moves: {}", moves.join(" "))));

    let paragraph = Paragraph::new(content).block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step progress gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_step_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_step_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_moves = app.solution.len().saturating_sub(1);
    let percent = if total_moves == 0 {
        0
    } else {
        (app.step_index * 100 / total_moves) as u16
    };

    let label = match app.last_stats {
        Some(stats) if total_moves > 0 => format!(
            "{}/{total_moves} moves | {} boards expanded",
            app.step_index, stats.expanded
        ),
        _ => "no solution".to_string(),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Editing => "Mode: Editing",
        InputMode::Browsing => "Mode: Browsing",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let heuristic_text = format!("Heuristic: {}", app.heuristic.name());
    f.render_widget(
        Paragraph::new(heuristic_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Editing => "q: Quit | 0-8: Set | TAB: Grid | s: Solve | r: Reset",
        InputMode::Browsing => "q: Quit | ←/→: Step | Home/End | e: Edit | r: Reset",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{HeuristicType, SearchOptions};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_editors_before_solving() {
        let app = App::new(HeuristicType::default(), SearchOptions::default());
        let text = rendered_text(&app);
        assert!(text.contains("Initial State"));
        assert!(text.contains("Goal State"));
        assert!(text.contains("No solution yet"));
        assert!(text.contains("Mode: Editing"));
    }

    #[test]
    fn renders_step_label_after_solving() {
        let mut app = App::new(HeuristicType::default(), SearchOptions::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

        let text = rendered_text(&app);
        assert!(text.contains("Step 2 of 16"));
        assert!(text.contains("Mode: Browsing"));
    }
}
