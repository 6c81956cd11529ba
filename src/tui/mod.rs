// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Card gallery plus detail overlay (ratatui + crossterm). All state lives in
//! [`App`]; every frame re-renders from the session's active sequence.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::Profile;
use crate::session::DirectorySession;

mod cards;
pub mod overlay;

pub use overlay::{DetailOverlay, NavVisibility};

pub(crate) const FOCUS_COLOR: Color = Color::LightGreen;
pub(crate) const CARD_BORDER_COLOR: Color = Color::DarkGray;
pub(crate) const OVERLAY_BORDER_COLOR: Color = Color::LightYellow;
pub(crate) const FOOTER_LABEL_COLOR: Color = Color::Gray;
pub(crate) const FOOTER_KEY_COLOR: Color = Color::Cyan;
const BANNER_COLOR: Color = Color::LightRed;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🆁 🅾 🅻 🅾 🅳 🅴 🆇 ";
const TOAST_TTL: Duration = Duration::from_secs(3);

/// Built-in offline directory backing `--demo` mode.
pub fn demo_directory() -> Vec<Profile> {
    crate::model::fixtures::profile_dozen()
}

/// Runs the interactive terminal UI against the given session.
pub fn run_with_directory(session: DirectorySession) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(session);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let gallery_area = layout[0];
    let status_area = layout[1];

    let shown = app.session.active().len();
    let total = app.session.full().len();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(gallery_title(shown, total, app.session.query()))
        .border_style(Style::default().fg(FOOTER_LABEL_COLOR));
    let inner = block.inner(gallery_area);
    frame.render_widget(block, gallery_area);

    if inner.width > 0 && inner.height > 0 {
        if app.no_results() {
            render_centered_notice(
                frame,
                inner,
                "No results found. Try again.",
                Style::default().fg(BANNER_COLOR).add_modifier(Modifier::BOLD),
            );
        } else if app.session.full().is_empty() {
            render_centered_notice(
                frame,
                inner,
                "No profiles loaded.",
                Style::default().fg(FOOTER_LABEL_COLOR),
            );
        } else {
            let columns = cards::grid_columns(inner.width);
            let rows = cards::visible_rows(inner.height);
            app.grid_cols = columns;
            app.clamp_cursor();
            app.ensure_cursor_visible(columns, rows);
            cards::render_gallery(frame, inner, app.session.active(), app.cursor, app.scroll_row);
        }
    }

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    if app.search_mode == SearchMode::Editing {
        let query = app.search_input.as_str();
        let status = Paragraph::new(search_footer_line(query, &toast_suffix));
        frame.render_widget(status, status_area);
        let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
        frame.render_widget(brand, status_area);

        let cursor_x = status_area
            .x
            .saturating_add(1)
            .saturating_add(query.chars().count() as u16)
            .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
        frame.set_cursor(cursor_x, status_area.y);
    } else {
        let status = Paragraph::new(footer_help_line(app, &toast_suffix));
        frame.render_widget(status, status_area);
        let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
        frame.render_widget(brand, status_area);
    }

    if let Some(overlay) = app.overlay.as_ref() {
        overlay::render_detail(frame, gallery_area, overlay);
    }

    if app.show_help {
        render_help(frame, gallery_area);
    }
}

fn render_centered_notice(frame: &mut Frame<'_>, area: Rect, message: &str, style: Style) {
    let notice_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let notice = Paragraph::new(Line::from(Span::styled(message.to_owned(), style)))
        .alignment(Alignment::Center);
    frame.render_widget(notice, notice_area);
}

fn gallery_title(shown: usize, total: usize, query: &str) -> String {
    let mut title = format!("─ Directory ({shown}/{total})");
    if !query.is_empty() {
        title.push_str(&format!(" ─ filter '{query}'"));
    }
    title.push(' ');
    title
}

fn footer_help_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let key_style = Style::default().fg(FOOTER_KEY_COLOR);
    let label_style = Style::default().fg(FOOTER_LABEL_COLOR);

    let entries: &[(&str, &str)] = if app.overlay.is_some() {
        &[("←/→", "page"), ("Esc", "close"), ("/", "search")]
    } else {
        &[("↵", "open"), ("←↑↓→", "move"), ("/", "search"), ("?", "help"), ("q", "quit")]
    };

    let mut spans = Vec::<Span<'static>>::new();
    for (key, label) in entries {
        if !spans.is_empty() {
            spans.push(Span::styled(" | ", label_style));
        }
        spans.push(Span::styled((*key).to_owned(), key_style));
        spans.push(Span::styled(format!(" {label}"), label_style));
    }
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(toast_suffix.to_owned(), Style::default().fg(Color::White)));
    }
    Line::from(spans)
}

fn search_footer_line(query: &str, toast_suffix: &str) -> Line<'static> {
    let mut spans = vec![
        Span::styled("/".to_owned(), Style::default().fg(FOOTER_KEY_COLOR)),
        Span::raw(query.to_owned()),
    ];
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(toast_suffix.to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)))
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(52, 64, area);
    frame.render_widget(Clear, popup);

    let key_style = Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD);
    let rows: &[(&str, &str)] = &[
        ("←↑↓→ / hjkl", "Move card selection"),
        ("Enter", "Open selected profile"),
        ("→/n, ←/p", "Page inside the overlay"),
        ("Esc / x", "Close the overlay"),
        ("/", "Edit search query"),
        ("Enter", "Submit query (empty clears)"),
        ("Esc", "Cancel query edit"),
        ("?", "Toggle help"),
        ("q", "Quit"),
    ];
    let key_width = rows.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
    let lines: Vec<Line<'static>> = rows
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:>key_width$}"), key_style),
                Span::raw("  "),
                Span::raw((*desc).to_owned()),
            ])
        })
        .collect();

    let help = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("─ Help ")
            .border_style(Style::default().fg(FOOTER_LABEL_COLOR)),
    );
    frame.render_widget(help, popup);
}

pub(crate) fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
}

struct App {
    session: DirectorySession,
    cursor: usize,
    scroll_row: usize,
    grid_cols: usize,
    overlay: Option<DetailOverlay>,
    search_mode: SearchMode,
    search_input: String,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    fn new(session: DirectorySession) -> Self {
        Self {
            session,
            cursor: 0,
            scroll_row: 0,
            grid_cols: 1,
            overlay: None,
            search_mode: SearchMode::Inactive,
            search_input: String::new(),
            toast: None,
            show_help: false,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_code(key.code);
    }

    fn handle_key_code(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        if self.search_mode == SearchMode::Editing {
            self.handle_search_edit_key(code);
            return;
        }

        if self.overlay.is_some() {
            self.handle_overlay_key(code);
            return;
        }

        self.handle_gallery_key(code);
    }

    fn handle_gallery_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.enter_search_mode(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Enter => self.open_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-(self.grid_cols as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(self.grid_cols as isize),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.session.active().len().saturating_sub(1),
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => self.overlay = None,
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => self.overlay_next(),
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => self.overlay_prev(),
            KeyCode::Char('/') => self.enter_search_mode(),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.search_mode = SearchMode::Inactive;
                self.search_input.clear();
            }
            KeyCode::Enter => self.submit_search(),
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(ch) => self.search_input.push(ch),
            _ => {}
        }
    }

    fn enter_search_mode(&mut self) {
        self.search_mode = SearchMode::Editing;
        self.search_input.clear();
    }

    /// Submits the edited query: filter the full sequence, replace the active
    /// one, and drop any open overlay since its index points into the
    /// superseded sequence.
    fn submit_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        let submitted = std::mem::take(&mut self.search_input);

        self.overlay = None;
        self.session.apply_filter(&submitted);
        self.cursor = 0;
        self.scroll_row = 0;

        if self.session.has_filter() {
            let shown = self.session.active().len();
            self.set_toast(format!("{shown} match(es) for '{}'", self.session.query()));
        } else {
            self.set_toast("Filter cleared");
        }
    }

    /// Opens the overlay for the selected card, passing the position together
    /// with the sequence the card was rendered from. Ignored while an overlay
    /// is already up; only paging replaces a live overlay.
    fn open_selected(&mut self) {
        if self.overlay.is_some() {
            return;
        }
        let profiles = self.session.active();
        if profiles.is_empty() {
            return;
        }

        let index = self.cursor.min(profiles.len() - 1);
        self.overlay = Some(DetailOverlay::open(index, profiles.to_vec()));
    }

    fn overlay_next(&mut self) {
        let Some(overlay) = self.overlay.take() else {
            return;
        };
        self.overlay = Some(overlay.next());
    }

    fn overlay_prev(&mut self) {
        let Some(overlay) = self.overlay.take() else {
            return;
        };
        self.overlay = Some(overlay.prev());
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.session.active().len();
        if len == 0 {
            return;
        }

        let current = self.cursor.min(len - 1) as isize;
        let moved = (current + delta).clamp(0, len as isize - 1);
        self.cursor = moved as usize;
    }

    fn clamp_cursor(&mut self) {
        let len = self.session.active().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    fn ensure_cursor_visible(&mut self, columns: usize, rows: usize) {
        let row = self.cursor / columns.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    fn no_results(&self) -> bool {
        self.session.has_filter() && self.session.active().is_empty()
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
