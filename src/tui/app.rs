//! TUI application state

use crate::game::{Door, DoorChooser, Session};
use crossterm::event::KeyCode;

/// TUI application state
pub struct App<C> {
    pub session: Session<C>,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub trial_input: String,
    pub notification: Option<Notification>,
    pub should_quit: bool,
    view_stack: Vec<ViewMode>,
}

/// View modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Game,
    Help,
}

/// Whether keystrokes go to the trial count field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Modal message; blocks other input until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl<C: DoorChooser> App<C> {
    pub fn new(session: Session<C>, default_trials: u64) -> Self {
        Self {
            session,
            view_mode: ViewMode::Game,
            input_mode: InputMode::Normal,
            trial_input: default_trials.to_string(),
            notification: None,
            should_quit: false,
            view_stack: Vec::new(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_stack.push(self.view_mode);
            self.view_mode = mode;
        }
    }

    pub fn pop_view_mode(&mut self) {
        self.view_mode = self.view_stack.pop().unwrap_or(ViewMode::Game);
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.notification.is_some() {
            self.dismiss_notification();
            return;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(code);
            return;
        }

        if self.view_mode == ViewMode::Help {
            match code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?') => self.pop_view_mode(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('h') | KeyCode::Char('?') => self.set_view_mode(ViewMode::Help),
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(door) = c.to_digit(10).and_then(|d| Door::from_number(d as u8)) {
                    self.session.select_door(door);
                }
            }
            KeyCode::Char('s') => {
                self.session.decide(true);
            }
            KeyCode::Char('k') => {
                self.session.decide(false);
            }
            KeyCode::Char('r') => self.session.start_round(),
            KeyCode::Char('n') => self.input_mode = InputMode::Editing,
            KeyCode::Enter => self.run_batch(),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.run_batch();
            }
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.trial_input.pop();
            }
            // raw text, validated on Enter
            KeyCode::Char(c) if !c.is_control() => self.trial_input.push(c),
            _ => {}
        }
    }

    /// Run a batch with the current trial count text
    pub fn run_batch(&mut self) {
        let notification = match self.session.run_batch(&self.trial_input) {
            Ok(result) => {
                let stats = self.session.stats();
                Notification {
                    kind: NotificationKind::Info,
                    title: "Simulation complete".to_string(),
                    message: format!(
                        "Ran {} simulations\nSwitch win rate: {:.1}%\nStay win rate: {:.1}%",
                        result.trials,
                        stats.switch_win_rate(),
                        stats.stay_win_rate()
                    ),
                }
            }
            Err(e) => Notification {
                kind: NotificationKind::Error,
                title: if e.is_user_input() {
                    "Please enter a positive number".to_string()
                } else {
                    "Simulation failed".to_string()
                },
                message: e.to_string(),
            },
        };
        self.notification = Some(notification);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
