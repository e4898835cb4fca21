//! TUI application state and logic

use super::editor::{EditResult, GridEditor};
use crate::boards::default_pair;
use crate::solver::{HeuristicType, SearchOptions, SearchOutcome, SearchStats, Solver, Step};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub heuristic: HeuristicType,
    pub options: SearchOptions,
    pub initial: GridEditor,
    pub goal: GridEditor,
    pub focus: GridFocus,
    pub cursor: (usize, usize),
    pub input_mode: InputMode,
    pub solution: Vec<Step>,
    pub last_stats: Option<SearchStats>,
    pub step_index: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFocus {
    Initial,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    Browsing,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(heuristic: HeuristicType, options: SearchOptions) -> Self {
        let pair = default_pair();

        Self {
            heuristic,
            options,
            initial: GridEditor::from_board(&pair.initial),
            goal: GridEditor::from_board(&pair.goal),
            focus: GridFocus::Initial,
            cursor: (0, 0),
            input_mode: InputMode::Editing,
            solution: Vec::new(),
            last_stats: None,
            step_index: 0,
            messages: vec![
                Message {
                    text: "Edit the grids, then press 's' to solve.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Arrows move, TAB switches grid, 0 clears a cell.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// The grid under the cursor
    #[must_use]
    pub const fn focused(&self) -> &GridEditor {
        match self.focus {
            GridFocus::Initial => &self.initial,
            GridFocus::Goal => &self.goal,
        }
    }

    const fn focused_mut(&mut self) -> &mut GridEditor {
        match self.focus {
            GridFocus::Initial => &mut self.initial,
            GridFocus::Goal => &mut self.goal,
        }
    }

    pub fn move_cursor(&mut self, dr: isize, dc: isize) {
        let size = self.focused().size();
        let (row, col) = self.cursor;
        let row = row.saturating_add_signed(dr).min(size - 1);
        let col = col.saturating_add_signed(dc).min(size - 1);
        self.cursor = (row, col);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            GridFocus::Initial => GridFocus::Goal,
            GridFocus::Goal => GridFocus::Initial,
        };
    }

    /// Write a value under the cursor, reporting the outcome as a message
    pub fn enter_value(&mut self, value: u8) {
        let (row, col) = self.cursor;
        match self.focused_mut().set(row, col, value) {
            EditResult::Inserted => {
                self.add_message("New number inserted!", MessageStyle::Success);
            }
            EditResult::Unchanged => {}
            EditResult::Duplicate => {
                self.add_message("Number already exists!", MessageStyle::Error);
            }
            EditResult::OutOfRange => {
                let max = self.focused().size().pow(2) - 1;
                self.add_message(
                    &format!("Values must be between 0 and {max}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Validate both grids and run the search
    pub fn solve(&mut self) {
        let initial = match self.initial.to_board() {
            Ok(board) => board,
            Err(e) => {
                self.add_message(&format!("Initial state: {e}"), MessageStyle::Error);
                return;
            }
        };
        let goal = match self.goal.to_board() {
            Ok(board) => board,
            Err(e) => {
                self.add_message(&format!("Goal state: {e}"), MessageStyle::Error);
                return;
            }
        };

        let report = match Solver::new(self.heuristic, &initial, &goal) {
            Ok(solver) => solver.with_options(self.options).search(),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        debug!("tui solve: {:?}", report.stats);
        self.last_stats = Some(report.stats);

        match report.outcome {
            SearchOutcome::Solved(solution) => {
                let depth = solution.depth();
                self.solution = solution.into_steps();
                self.step_index = 0;
                self.input_mode = InputMode::Browsing;
                self.add_message(
                    &format!("Solved in {depth} moves! ←/→ to browse steps."),
                    MessageStyle::Success,
                );
            }
            SearchOutcome::NotFound => {
                self.solution.clear();
                self.add_message(
                    "No solution: the goal is not reachable from this state.",
                    MessageStyle::Error,
                );
            }
            SearchOutcome::BudgetExceeded { expanded } => {
                self.solution.clear();
                self.add_message(
                    &format!("Gave up after {expanded} expansions."),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn next_step(&mut self) {
        if self.step_index + 1 < self.solution.len() {
            self.step_index += 1;
        }
    }

    pub fn previous_step(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
    }

    /// Restore the preset grids and drop any solution
    pub fn reset(&mut self) {
        let pair = default_pair();
        self.initial = GridEditor::from_board(&pair.initial);
        self.goal = GridEditor::from_board(&pair.goal);
        self.solution.clear();
        self.last_stats = None;
        self.step_index = 0;
        self.input_mode = InputMode::Editing;
        self.add_message("Grids reset to defaults.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Editing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('s') | KeyCode::Enter => self.solve(),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Tab => self.toggle_focus(),
                KeyCode::Up => self.move_cursor(-1, 0),
                KeyCode::Down => self.move_cursor(1, 0),
                KeyCode::Left => self.move_cursor(0, -1),
                KeyCode::Right => self.move_cursor(0, 1),
                KeyCode::Backspace | KeyCode::Delete => self.enter_value(0),
                KeyCode::Char(c) => {
                    if let Some(digit) = c.to_digit(10) {
                        self.enter_value(digit as u8);
                    }
                }
                _ => {}
            },
            InputMode::Browsing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Right | KeyCode::Char('l' | ' ') => self.next_step(),
                KeyCode::Left | KeyCode::Char('h') => self.previous_step(),
                KeyCode::Home => self.step_index = 0,
                KeyCode::End => self.step_index = self.solution.len().saturating_sub(1),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Esc | KeyCode::Char('e') | KeyCode::Tab => {
                    self.input_mode = InputMode::Editing;
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app() -> App {
        App::new(HeuristicType::default(), SearchOptions::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn last_message(app: &App) -> &str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn duplicate_entry_shows_error() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(last_message(&app), "Number already exists!");
        assert_eq!(app.initial.get(0, 0), 0);
    }

    #[test]
    fn clearing_then_entering_inserts() {
        let mut app = new_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(last_message(&app), "New number inserted!");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(last_message(&app), "New number inserted!");
        assert_eq!(app.initial.get(0, 0), 1);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = new_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, (0, 0));
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, (2, 2));
    }

    #[test]
    fn tab_switches_grid() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, GridFocus::Goal);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(last_message(&app), "Number already exists!");
    }

    #[test]
    fn solve_defaults_enters_browsing() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.input_mode, InputMode::Browsing);
        assert_eq!(app.solution.len(), 16);
        assert!(last_message(&app).starts_with("Solved in 15 moves"));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.step_index, 0);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.step_index, 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.step_index, 15);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.step_index, 15);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn incomplete_grid_blocks_solve() {
        let mut app = new_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.solution.is_empty());
        assert!(last_message(&app).starts_with("Initial state:"));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = new_app();
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.initial, GridEditor::from_board(&default_pair().initial));
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app();
        for _ in 0..10 {
            app.add_message("x", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
