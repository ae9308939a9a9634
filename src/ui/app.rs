//! Interactive calculator: shell state and input routing.

use crate::calculator::format_number;
use crate::clipboard::copy_to_clipboard;
use crate::history::HistoryEntry;
use crate::keymap::{self, Action};
use crate::session::Session;
use crate::theme::ThemePreferences;
use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use tracing::{debug, info, warn};

/// Lines per rendered history entry.
pub(super) const HISTORY_ROW_HEIGHT: u16 = 3;

/// Longest accepted calculator name.
const MAX_NAME_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Keypad,
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    Accent,
}

/// The open settings panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub field: SettingsField,
    /// Name being typed, while editing.
    pub draft: Option<String>,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            field: SettingsField::Name,
            draft: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// A clickable region from the last frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hitbox {
    pub area: Rect,
    pub action: Action,
}

pub struct App {
    pub(super) session: Session,
    pub(super) prefs: ThemePreferences,
    pub(super) scientific: bool,
    pub(super) history_open: bool,
    pub(super) focus: Focus,
    pub(super) history_state: ListState,
    pub(super) settings: Option<SettingsForm>,
    pub(super) status: Option<Status>,
    pub(super) hitboxes: Vec<Hitbox>,
    /// Where history rows were drawn in the last frame.
    pub(super) history_area: Option<Rect>,
    should_quit: bool,
}

impl App {
    pub fn new(prefs: ThemePreferences, scientific: bool) -> Self {
        Self {
            session: Session::new(),
            prefs,
            scientific,
            history_open: false,
            focus: Focus::Keypad,
            history_state: ListState::default(),
            settings: None,
            status: None,
            hitboxes: Vec::new(),
            history_area: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn prefs(&self) -> &ThemePreferences {
        &self.prefs
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw and handle events until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!(name = %self.prefs.name, accent = %self.prefs.accent, "starting calculator");

        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .context("failed to draw frame")?;
            let event = event::read().context("failed to read terminal event")?;
            self.handle_event(event);
        }

        info!("calculator closed");
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Control chords are shell shortcuts in every panel.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(action) = keymap::action_for_key(&key) {
                self.perform(action);
            }
            return;
        }

        if self.settings.is_some() {
            self.handle_settings_key(key);
            return;
        }

        if key.code == KeyCode::Tab && self.history_open {
            self.focus = match self.focus {
                Focus::Keypad => Focus::History,
                Focus::History => Focus::Keypad,
            };
            if self.focus == Focus::History && self.history_state.selected().is_none() {
                self.select_history_row(0);
            }
            return;
        }

        if self.focus == Focus::History && self.handle_history_key(key) {
            return;
        }

        if let Some(action) = keymap::action_for_key(&key) {
            self.perform(action);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.settings.is_some() {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .hitboxes
                    .iter()
                    .find(|hitbox| hitbox.area.contains(position))
                    .map(|hitbox| hitbox.action);

                if let Some(action) = hit {
                    self.perform(action);
                } else if let Some(index) = self.history_row_at(position) {
                    self.restore_history(index);
                }
            }
            MouseEventKind::ScrollDown if self.in_history(position) => {
                self.move_history_selection(1)
            }
            MouseEventKind::ScrollUp if self.in_history(position) => {
                self.move_history_selection(-1)
            }
            _ => {}
        }
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Calc(input) => {
                let newest = self.session.history().get(0).map(HistoryEntry::id);
                self.session.dispatch(input);
                self.status = None;
                // Keep the highlight on the newest row when an entry lands on top.
                if self.history_state.selected().is_some()
                    && self.session.history().get(0).map(HistoryEntry::id) != newest
                {
                    self.history_state.select(Some(0));
                }
            }
            Action::ToggleScientific => self.scientific = !self.scientific,
            Action::ToggleHistory => {
                self.history_open = !self.history_open;
                if !self.history_open {
                    self.focus = Focus::Keypad;
                }
            }
            Action::ToggleSettings => {
                self.settings = match self.settings.take() {
                    Some(_) => None,
                    None => Some(SettingsForm::default()),
                };
            }
            Action::CopyDisplay => self.copy_display(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn copy_display(&mut self) {
        let text = self.session.state().display().to_string();
        match copy_to_clipboard(&text) {
            Ok(()) => {
                info!(%text, "copied display to clipboard");
                self.status = Some(Status::info(format!("Copied {text}")));
            }
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                self.status = Some(Status::error(err.to_string()));
            }
        }
    }

    /// Returns true if the key was consumed by the history panel.
    fn handle_history_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_history_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_history_selection(1),
            KeyCode::Enter => {
                if let Some(index) = self.history_state.selected() {
                    self.restore_history(index);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                self.session.clear_history();
                self.history_state.select(None);
                self.status = Some(Status::info("History cleared"));
            }
            KeyCode::Esc => self.focus = Focus::Keypad,
            _ => return false,
        }
        true
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let Some(form) = self.settings.as_mut() else {
            return;
        };

        if let Some(draft) = form.draft.as_mut() {
            match key.code {
                KeyCode::Enter => {
                    self.prefs.rename(draft);
                    debug!(name = %self.prefs.name, "renamed calculator");
                    form.draft = None;
                }
                KeyCode::Esc => form.draft = None,
                KeyCode::Backspace => {
                    draft.pop();
                }
                KeyCode::Char(c) if draft.chars().count() < MAX_NAME_LEN => draft.push(c),
                _ => {}
            }
            return;
        }

        match (key.code, form.field) {
            (KeyCode::Up | KeyCode::Down | KeyCode::Tab, SettingsField::Name) => {
                form.field = SettingsField::Accent;
            }
            (KeyCode::Up | KeyCode::Down | KeyCode::Tab, SettingsField::Accent) => {
                form.field = SettingsField::Name;
            }
            (KeyCode::Enter, SettingsField::Name) => form.draft = Some(self.prefs.name.clone()),
            (KeyCode::Right | KeyCode::Enter, SettingsField::Accent) => {
                self.prefs.accent = self.prefs.accent.next();
                debug!(accent = %self.prefs.accent, "accent changed");
            }
            (KeyCode::Left, SettingsField::Accent) => {
                self.prefs.accent = self.prefs.accent.previous();
                debug!(accent = %self.prefs.accent, "accent changed");
            }
            (KeyCode::Esc | KeyCode::Char('o'), _) => self.settings = None,
            _ => {}
        }
    }

    fn restore_history(&mut self, index: usize) {
        if self.session.select_history(index) {
            let result = self.session.state().display().to_string();
            self.status = Some(Status::info(format!("Restored {result}")));
            self.history_state.select(Some(index));
            self.focus = Focus::Keypad;
        }
    }

    fn select_history_row(&mut self, index: usize) {
        let len = self.session.history().len();
        self.history_state
            .select((len > 0).then(|| index.min(len - 1)));
    }

    fn move_history_selection(&mut self, delta: isize) {
        let current = self.history_state.selected().unwrap_or(0);
        self.select_history_row(current.saturating_add_signed(delta));
    }

    fn in_history(&self, position: Position) -> bool {
        self.history_area.is_some_and(|area| area.contains(position))
    }

    fn history_row_at(&self, position: Position) -> Option<usize> {
        let area = self.history_area?;
        if !area.contains(position) {
            return None;
        }
        let row =
            usize::from((position.y - area.y) / HISTORY_ROW_HEIGHT) + self.history_state.offset();
        (row < self.session.history().len()).then_some(row)
    }

    /// Memory indicator text, when memory is non-zero.
    pub(super) fn memory_indicator(&self) -> Option<String> {
        let memory = self.session.state().memory();
        (memory != 0.0).then(|| format!("Memory: {}", format_number(memory)))
    }
}
