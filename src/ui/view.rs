//! Rendering.
//!
//! Every frame rebuilds the hitbox list, so mouse clicks always resolve
//! against what is currently on screen.

use super::app::{App, Focus, Hitbox, SettingsField, SettingsForm};
use super::keypad::{self, COLUMNS, Key, KeyKind};
use super::theme::Palette;
use crate::calculator::CalculationState;
use crate::history::HistoryLog;
use crate::keymap::Action;
use crate::theme::{AccentColor, ThemePreferences};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, List, ListItem, ListState, Padding, Paragraph};

const HISTORY_WIDTH: u16 = 34;
const SETTINGS_WIDTH: u16 = 46;
const SETTINGS_HEIGHT: u16 = 11;

impl App {
    pub(super) fn draw(&mut self, frame: &mut Frame) {
        let palette = Palette::new(self.prefs.accent);
        let area = frame.area();
        frame.render_widget(Block::new().style(palette.base()), area);

        self.hitboxes.clear();
        self.history_area = None;

        let (main, side) = if self.history_open {
            let [main, side] =
                Layout::horizontal([Constraint::Min(24), Constraint::Length(HISTORY_WIDTH)])
                    .areas(area);
            (main, Some(side))
        } else {
            (area, None)
        };

        let [header, display, keys, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(main);

        draw_header(
            frame,
            header,
            &self.prefs,
            self.scientific,
            &palette,
            &mut self.hitboxes,
        );
        draw_display(
            frame,
            display,
            self.session.state(),
            self.memory_indicator(),
            &palette,
        );
        draw_keypad(
            frame,
            keys,
            &keypad::rows(self.scientific),
            &palette,
            &mut self.hitboxes,
        );
        draw_status(frame, status, self, &palette);

        if let Some(side) = side {
            self.history_area = Some(draw_history(
                frame,
                side,
                self.session.history(),
                &mut self.history_state,
                self.focus == Focus::History,
                &palette,
            ));
        }

        if let Some(form) = &self.settings {
            draw_settings(frame, area, &self.prefs, form, &palette);
        }
    }
}

fn draw_header(
    frame: &mut Frame,
    area: Rect,
    prefs: &ThemePreferences,
    scientific: bool,
    palette: &Palette,
    hitboxes: &mut Vec<Hitbox>,
) {
    let [title_row, hint_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let toggles = [
        (if scientific { "[Basic]" } else { "[Scientific]" }, Action::ToggleScientific),
        ("[History]", Action::ToggleHistory),
        ("[Settings]", Action::ToggleSettings),
    ];

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(toggles.iter().map(|(label, _)| Constraint::Length(label.len() as u16 + 1)));
    let cells = Layout::horizontal(constraints).split(title_row);

    let title = Line::from(vec![
        Span::styled("▦ ", Style::new().fg(palette.accent)),
        Span::styled(prefs.name.as_str(), Style::new().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(title), cells[0]);

    for (cell, (label, action)) in cells.iter().skip(1).zip(toggles) {
        frame.render_widget(
            Paragraph::new(label).style(Style::new().fg(palette.accent)),
            *cell,
        );
        hitboxes.push(Hitbox {
            area: *cell,
            action,
        });
    }

    frame.render_widget(
        Paragraph::new("s scientific · h history · Tab focus · o settings · y copy · q quit")
            .style(palette.muted()),
        hint_row,
    );
}

fn draw_display(
    frame: &mut Frame,
    area: Rect,
    state: &CalculationState,
    memory: Option<String>,
    palette: &Palette,
) {
    let block = Block::bordered()
        .border_style(palette.muted())
        .style(Style::new().bg(palette.display_background));

    let summary = state.pending().map(|p| p.summary()).unwrap_or_default();
    let lines = vec![
        Line::styled(summary, palette.muted()),
        Line::styled(
            state.formatted_display(),
            Style::new()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(memory.unwrap_or_default(), Style::new().fg(palette.accent)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(block),
        area,
    );
}

fn draw_keypad(
    frame: &mut Frame,
    area: Rect,
    rows: &[Vec<Key>],
    palette: &Palette,
    hitboxes: &mut Vec<Hitbox>,
) {
    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows.len()]).split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let constraints = row
            .iter()
            .map(|key| Constraint::Ratio(u32::from(key.span), u32::from(COLUMNS)));
        let key_areas = Layout::horizontal(constraints).split(*row_area);

        for (key, key_area) in row.iter().zip(key_areas.iter()) {
            draw_key(frame, *key_area, key, palette);
            hitboxes.push(Hitbox {
                area: *key_area,
                action: Action::Calc(key.input),
            });
        }
    }
}

fn draw_key(frame: &mut Frame, area: Rect, key: &Key, palette: &Palette) {
    let style = match key.kind {
        KeyKind::Digit => Style::new().fg(palette.text_primary).bg(palette.key_digit),
        KeyKind::Function => Style::new().fg(palette.text_primary).bg(palette.key_function),
        KeyKind::Operator => Style::new()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    };

    let mut label = Paragraph::new(key.label)
        .alignment(Alignment::Center)
        .style(style);

    if area.height >= 3 {
        let top = (area.height - 3) / 2;
        label = label.block(
            Block::bordered()
                .border_style(Style::new().fg(palette.background))
                .padding(Padding::top(top)),
        );
    }

    frame.render_widget(label, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(status) = &app.status else {
        return;
    };

    let style = if status.is_error {
        Style::new().fg(palette.error)
    } else {
        palette.muted()
    };
    frame.render_widget(Paragraph::new(status.text.as_str()).style(style), area);
}

/// Returns the area the history rows were drawn in.
fn draw_history(
    frame: &mut Frame,
    area: Rect,
    history: &HistoryLog,
    state: &mut ListState,
    focused: bool,
    palette: &Palette,
) -> Rect {
    let block = Block::bordered()
        .title(" History ")
        .title_bottom(Line::from(" Del clear ").right_aligned())
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if history.is_empty() {
        let [middle] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(
            Paragraph::new("No calculations yet")
                .alignment(Alignment::Center)
                .style(palette.muted()),
            middle,
        );
        return inner;
    }

    let items: Vec<ListItem> = history
        .iter()
        .map(|entry| {
            let lines = vec![
                Line::styled(entry.expression().to_string(), palette.muted()),
                Line::styled(
                    format!("= {}", entry.result()),
                    Style::new().add_modifier(Modifier::BOLD),
                ),
                Line::styled(entry.time_of_day(), palette.muted()),
            ];
            ListItem::new(Text::from(lines))
        })
        .collect();

    let highlight = if focused {
        palette.highlight()
    } else {
        Style::new().bg(palette.key_digit)
    };

    frame.render_stateful_widget(List::new(items).highlight_style(highlight), inner, state);
    inner
}

fn draw_settings(
    frame: &mut Frame,
    area: Rect,
    prefs: &ThemePreferences,
    form: &SettingsForm,
    palette: &Palette,
) {
    let [popup] = Layout::horizontal([Constraint::Length(SETTINGS_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(SETTINGS_HEIGHT)])
        .flex(Flex::Center)
        .areas(popup);

    frame.render_widget(Clear, popup);

    let label_style = |field: SettingsField| {
        if form.field == field {
            Style::new().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(palette.text_primary)
        }
    };

    let name_line = match &form.draft {
        Some(draft) => Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{draft}▏"), Style::new().add_modifier(Modifier::UNDERLINED)),
        ]),
        None => Line::from(format!("  {}", prefs.name)),
    };

    let mut swatches = vec![Span::raw("  ")];
    for color in AccentColor::ALL {
        let (r, g, b) = color.rgb();
        let symbol = if color == prefs.accent { "[■]" } else { " ■ " };
        swatches.push(Span::styled(
            symbol,
            Style::new().fg(Color::Rgb(r, g, b)),
        ));
    }

    let lines = vec![
        Line::styled("Calculator Name", label_style(SettingsField::Name)),
        name_line,
        Line::raw(""),
        Line::styled("Button Color Theme", label_style(SettingsField::Accent)),
        Line::from(swatches),
        Line::from(format!("  {} {}", prefs.accent.name(), prefs.accent.hex()))
            .style(palette.muted()),
        Line::raw(""),
        Line::styled("↑↓ field · Enter edit/save · ←→ color · Esc close", palette.muted()),
    ];

    frame.render_widget(
        Paragraph::new(lines).style(palette.base()).block(
            Block::bordered()
                .title(" Settings ")
                .border_style(Style::new().fg(palette.accent))
                .padding(Padding::horizontal(1)),
        ),
        popup,
    );
}
