use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::browser::Navigator;
use crate::config::Button;
use crate::redirect::{Clock, RedirectQueue, StatusLine};

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Board state plus the capabilities it navigates and tells time with.
///
/// The navigator and clock are passed in at construction so tests can drive
/// the redirect sequence with fakes instead of a browser and a wall clock.
pub struct App {
    pub buttons: Vec<Button>,
    pub table_state: TableState,
    pub status: StatusLine,
    pub redirects: RedirectQueue,
    pub navigator: Box<dyn Navigator>,
    pub clock: Box<dyn Clock>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub verbose: bool,
    /// Area the button table was last drawn into, for mouse hit-testing.
    pub table_area: Option<Rect>,
}

impl App {
    pub fn new(
        buttons: Vec<Button>,
        navigator: Box<dyn Navigator>,
        clock: Box<dyn Clock>,
        verbose: bool,
    ) -> Self {
        let mut table_state = TableState::default();
        if !buttons.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            buttons,
            table_state,
            status: StatusLine::new(),
            redirects: RedirectQueue::new(),
            navigator,
            clock,
            input_mode: InputMode::Normal,
            should_quit: false,
            verbose,
            table_area: None,
        }
    }

    pub fn next_row(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= self.buttons.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.buttons.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_button(&self) -> Option<&Button> {
        self.table_state.selected().and_then(|i| self.buttons.get(i))
    }

    /// Activate the currently selected button: announce the redirect and
    /// schedule the navigation.
    pub fn activate_selected(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.activate(i);
        }
    }

    /// Activate the button at `index`, if one exists there.
    pub fn activate(&mut self, index: usize) {
        let now = self.clock.now();
        if let Some(button) = self.buttons.get(index) {
            self.redirects.activate(button, &mut self.status, now);
        }
    }

    /// Map a terminal click to a button row. Clicks outside the table, on the
    /// header, or past the last button do nothing.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(area) = self.table_area else {
            return;
        };
        // Data rows start below the header and its bottom margin.
        let rows_top = area.y + 2;
        if column < area.x
            || column >= area.x + area.width
            || row < rows_top
            || row >= area.y + area.height
        {
            return;
        }
        let index = self.table_state.offset() + (row - rows_top) as usize;
        if index < self.buttons.len() {
            self.table_state.select(Some(index));
            self.activate(index);
        }
    }

    /// Perform any redirects whose delay has elapsed. The first navigation
    /// that succeeds ends the session, the way a page stops existing once the
    /// browser leaves it. A failed navigation is reported on the status line
    /// and the board stays up.
    pub fn fire_due(&mut self) {
        let now = self.clock.now();
        for url in self.redirects.fire_due(now) {
            match self.navigator.go_to(&url) {
                Ok(()) => {
                    self.should_quit = true;
                    break;
                }
                Err(e) => {
                    self.status.set(format!("Failed to open browser: {}", e));
                }
            }
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
