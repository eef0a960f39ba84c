//! TUI runner — ratatui event loop with terminal setup and cleanup.
//!
//! The [`Tui`] struct owns the ratatui terminal, the application state
//! machine ([`App`]), the current [`SiteConfig`] snapshot, and the
//! [`Storage`] adapter. It runs the main loop: draw frames, poll for
//! keyboard events, route actions into store operations, and prune
//! notifications. Every store operation replaces the snapshot; the slot
//! on disk only changes on an explicit save.

use std::io;
use std::time::{Duration, Instant};

use chrono::Datelike;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Terminal;

use pageforge_core::data::storage::Storage;
use pageforge_core::data::store;
use pageforge_core::types::section::SectionKind;
use pageforge_core::types::site::SiteConfig;

use crate::app::{App, AppAction, EditTarget, Key, Mode};
use crate::editor::resolve_image;
use crate::notification::{NotificationCenter, NotificationKind};
use crate::section_view::{self, SectionContext};
use crate::theme::Theme;


const HEADER_HEIGHT: u16 = 2;
const BOTTOM_HEIGHT: u16 = 2;


/// Snapshot of all state needed for rendering a single frame.
///
/// Extracted from `Tui` so that `terminal.draw()` can borrow its closure
/// argument without conflicting with the `&mut self` borrow on the
/// terminal.
struct RenderState<'a> {
    app: &'a App,
    config: &'a SiteConfig,
    theme: &'a Theme,
    notifications: &'a NotificationCenter,
    scroll: u16,
    dirty: bool,
}


/// The main editor runner.
///
/// Manages terminal raw mode, the alternate screen, the ratatui backend,
/// the application state machine, and the in-memory configuration.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    config: SiteConfig,
    storage: Storage,
    theme: Theme,
    notifications: NotificationCenter,
    tick_rate: Duration,
    scroll: u16,
    /// Whether the in-memory snapshot has unsaved changes.
    dirty: bool,
}


impl Tui {
    /// Create a new TUI, entering raw mode and the alternate screen.
    ///
    /// The configuration is hydrated from `storage` up front; a missing
    /// or undecodable slot yields the default site.
    pub fn new(storage: Storage) -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let config = storage.load();

        Ok(Self {
            terminal,
            app: App::new(),
            config,
            storage,
            theme: Theme::default_theme(),
            notifications: NotificationCenter::new(20),
            tick_rate: Duration::from_millis(250),
            scroll: 0,
            dirty: false,
        })
    }

    /// Run the main event loop until quit is requested.
    pub fn run(&mut self) -> Result<(), io::Error> {
        let mut last_tick = Instant::now();

        loop {
            // Keep the selected section in view for this frame.
            let viewport = self
                .terminal
                .size()?
                .height
                .saturating_sub(HEADER_HEIGHT + BOTTOM_HEIGHT + 2);
            self.scroll =
                scroll_for_selection(&self.config, self.app.selected, viewport, self.scroll);

            let state = RenderState {
                app: &self.app,
                config: &self.config,
                theme: &self.theme,
                notifications: &self.notifications,
                scroll: self.scroll,
                dirty: self.dirty,
            };
            self.terminal.draw(|frame| render_frame(frame, &state))?;

            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Release {
                        continue;
                    }
                    // Ctrl-C always quits immediately.
                    if key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    let key = crossterm_to_key(key_event.code, key_event.modifiers);
                    if let Some(action) = self.app.handle_key(key, &self.config) {
                        if self.handle_action(action) {
                            break;
                        }
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.notifications.prune(now_ms());
                last_tick = Instant::now();
            }
        }

        self.shutdown()
    }

    // -------------------------------------------------------------------
    // Action handling
    // -------------------------------------------------------------------

    /// Apply an `AppAction` to the configuration snapshot.
    ///
    /// Returns `true` if the application should quit.
    fn handle_action(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Quit => return true,
            AppAction::SetTitle(title) => {
                self.config = store::set_title(&self.config, &title);
                self.dirty = true;
            }
            AppAction::Patch { section_id, patch } => {
                self.config = store::patch_section(&self.config, &section_id, &patch);
                self.dirty = true;
            }
            AppAction::Append(kind) => {
                self.config = store::append_section(&self.config, kind);
                self.app.selected = self.config.sections.len() - 1;
                self.app.field_index = 0;
                self.dirty = true;
            }
            AppAction::Delete(section_id) => {
                self.config = store::delete_section(&self.config, &section_id);
                self.app.clamp_selection(&self.config);
                self.dirty = true;
            }
            AppAction::Save => match self.storage.save(&self.config) {
                Ok(()) => {
                    self.dirty = false;
                    self.notifications.push(
                        NotificationKind::Success,
                        "Site saved — all changes are stored locally.",
                        now_ms(),
                        Some(5000),
                    );
                }
                Err(e) => {
                    self.notifications.push(
                        NotificationKind::Error,
                        &format!("Save failed: {}", e),
                        now_ms(),
                        Some(8000),
                    );
                }
            },
        }
        false
    }

    // -------------------------------------------------------------------
    // Shutdown
    // -------------------------------------------------------------------

    /// Restore the terminal to its normal state.
    fn shutdown(&mut self) -> Result<(), io::Error> {
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}


impl Drop for Tui {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}


/// Current wall-clock time in milliseconds since the epoch.
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}


// ---------------------------------------------------------------------------
// Scrolling
// ---------------------------------------------------------------------------

/// Adjust the scroll offset so the selected section is fully visible.
///
/// Sections render as `section_height` lines plus one separator line
/// each. The offset only moves when the selection would fall outside the
/// viewport.
fn scroll_for_selection(
    config: &SiteConfig,
    selected: usize,
    viewport: u16,
    current: u16,
) -> u16 {
    if viewport == 0 {
        return 0;
    }
    let mut start: u16 = 0;
    for (i, section) in config.sections.iter().enumerate() {
        let height = section_view::section_height(section.kind()) as u16 + 1;
        if i == selected {
            let end = start + height;
            if start < current {
                return start;
            }
            if end > current + viewport {
                return end.saturating_sub(viewport);
            }
            return current;
        }
        start += height;
    }
    current
}


// ---------------------------------------------------------------------------
// Rendering (free functions to avoid borrow conflicts)
// ---------------------------------------------------------------------------

/// Render the full screen: header, section list (or dialog), bottom bar.
fn render_frame(frame: &mut Frame, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(BOTTOM_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);
    render_main(frame, chunks[1], state);
    render_bottom(frame, chunks[2], state);

    render_notification(frame, chunks[1], state);
}


/// Header: the editable page title plus the key hints.
fn render_header(frame: &mut Frame, area: Rect, state: &RenderState) {
    let dirty_marker = if state.dirty { " *" } else { "" };
    let title_line = Line::from(vec![
        Span::styled(
            state.config.title.clone(),
            Style::default()
                .fg(state.theme.page_title.to_ratatui())
                .bold(),
        ),
        Span::styled(
            dirty_marker.to_string(),
            Style::default().fg(state.theme.warning.to_ratatui()),
        ),
    ]);
    let hints = Line::from(Span::styled(
        "[t] title  [a] add block  [s] save site  [?] help  [q] quit".to_string(),
        Style::default().fg(state.theme.footer.to_ratatui()),
    ));
    frame.render_widget(Paragraph::new(vec![title_line, hints]), area);
}


/// Dispatch main-area rendering based on the current mode.
fn render_main(frame: &mut Frame, area: Rect, state: &RenderState) {
    match &state.app.mode {
        Mode::AddSection => render_add_dialog(frame, area, state),
        Mode::ConfirmDelete { .. } => render_confirm_dialog(frame, area, state),
        Mode::Help => render_help(frame, area),
        _ => render_sections(frame, area, state),
    }
}


/// The scrollable section list.
fn render_sections(frame: &mut Frame, area: Rect, state: &RenderState) {
    let can_delete = state.config.sections.len() > 1;
    let mut lines: Vec<Line> = Vec::new();
    for (i, section) in state.config.sections.iter().enumerate() {
        let selected = i == state.app.selected;
        let ctx = SectionContext {
            selected,
            focused_field: if selected {
                state.app.current_field(state.config)
            } else {
                None
            },
            can_delete,
        };
        lines.extend(section_view::section_lines(section, &ctx, state.theme));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .scroll((state.scroll, 0));
    frame.render_widget(paragraph, area);
}


/// The add-section chooser: three layout choices with descriptions.
fn render_add_dialog(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "  Add a new block".to_string(),
            Style::default().bold(),
        )),
        Line::default(),
    ];
    for (i, kind) in SectionKind::ALL.iter().enumerate() {
        let chosen = i == state.app.add_choice;
        let marker = if chosen { "▸" } else { " " };
        let style = if chosen {
            Style::default()
                .fg(state.theme.selection.to_ratatui())
                .bold()
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} {:<14}", marker, kind.label()), style),
            Span::styled(
                kind.description().to_string(),
                Style::default().fg(state.theme.footer.to_ratatui()),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  [h/l] choose   [Enter] add   [Esc] cancel".to_string(),
        Style::default().fg(state.theme.footer.to_ratatui()),
    )));

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Add block")
            .border_style(Style::default().fg(state.theme.section_label.to_ratatui())),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}


/// The delete confirmation dialog.
fn render_confirm_dialog(frame: &mut Frame, area: Rect, state: &RenderState) {
    let text = "\n  Are you sure?\n\n  This removes the block and all of its content.\n\n  \
         [y] Delete   [n] Cancel\n";
    let dialog = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm")
            .border_style(Style::default().fg(state.theme.error.to_ratatui())),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}


/// The help overlay.
fn render_help(frame: &mut Frame, area: Rect) {
    let help_text = concat!(
        "Pageforge Help\n",
        "\n",
        "  j/k     Select previous/next block\n",
        "  h/l     Select field within the block\n",
        "  e/Enter Edit the focused field\n",
        "  t       Edit the page title\n",
        "  a       Add a block (hero, text, image + text)\n",
        "  d       Delete the selected block\n",
        "  s       Save the site\n",
        "  ?       Toggle this help\n",
        "  q       Quit\n",
        "  Ctrl-C  Force quit\n",
        "\n",
        "While editing: Enter commits, Esc cancels.\n",
    );
    let paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}


/// Bottom bar: the edit prompt while editing, the footer otherwise.
fn render_bottom(frame: &mut Frame, area: Rect, state: &RenderState) {
    if let Some(editor) = &state.app.editor {
        let prompt = format!("{}> ", target_label(editor.target()));
        let edit_line = Line::from(vec![
            Span::styled(
                prompt.clone(),
                Style::default().fg(state.theme.edit.to_ratatui()).bold(),
            ),
            Span::raw(editor.draft()),
        ]);
        // Image edits get a live preview with the placeholder fallback.
        let second = if editor.is_image() {
            let draft = editor.draft();
            Line::from(Span::styled(
                format!("preview: [image: {}]", resolve_image(Some(&draft))),
                Style::default().fg(state.theme.footer.to_ratatui()),
            ))
        } else {
            Line::from(Span::styled(
                "[Enter] commit   [Esc] cancel".to_string(),
                Style::default().fg(state.theme.footer.to_ratatui()),
            ))
        };
        frame.render_widget(Paragraph::new(vec![edit_line, second]), area);

        let cursor_x = area.x + prompt.chars().count() as u16 + editor.line.cursor_pos() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
    } else {
        let year = chrono::Local::now().year();
        let footer = Line::from(Span::styled(
            format!("© {} {}", year, state.config.title),
            Style::default().fg(state.theme.footer.to_ratatui()),
        ));
        let hint = Line::from(Span::styled(
            "Select a block and press e to edit it.".to_string(),
            Style::default().fg(state.theme.footer.to_ratatui()),
        ));
        frame.render_widget(Paragraph::new(vec![footer, hint]), area);
    }
}


/// Render the latest notification as a banner at the top of the main area.
fn render_notification(frame: &mut Frame, area: Rect, state: &RenderState) {
    if let Some(notif) = state.notifications.latest() {
        let color = match notif.kind {
            NotificationKind::Error => state.theme.error,
            NotificationKind::Warning => state.theme.warning,
            NotificationKind::Success => state.theme.success,
            NotificationKind::Info => state.theme.info,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color.to_ratatui()));
        let text = Paragraph::new(notif.body.clone())
            .block(block)
            .style(Style::default().fg(color.to_ratatui()));
        let banner = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 3.min(area.height),
        };
        frame.render_widget(Clear, banner);
        frame.render_widget(text, banner);
    }
}


/// The prompt label for an edit target.
fn target_label(target: &EditTarget) -> &'static str {
    match target {
        EditTarget::SiteTitle => "page title",
        EditTarget::SectionField { field, .. } => field.label(),
    }
}


// ---------------------------------------------------------------------------
// Key conversion
// ---------------------------------------------------------------------------

/// Convert a crossterm `KeyCode` + `KeyModifiers` into our domain `Key`.
pub fn crossterm_to_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = code {
            return Key::Ctrl(ch);
        }
    }
    if modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(ch) = code {
            return Key::Alt(ch);
        }
    }
    match code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Char('\0'), // unmapped keys produce a null char
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FieldKind;
    use pageforge_core::data::store;

    // --- Key conversion ---

    #[test]
    fn crossterm_char_to_key() {
        assert_eq!(
            crossterm_to_key(KeyCode::Char('a'), KeyModifiers::NONE),
            Key::Char('a')
        );
    }

    #[test]
    fn crossterm_ctrl_to_key() {
        assert_eq!(
            crossterm_to_key(KeyCode::Char('w'), KeyModifiers::CONTROL),
            Key::Ctrl('w')
        );
    }

    #[test]
    fn crossterm_alt_to_key() {
        assert_eq!(
            crossterm_to_key(KeyCode::Char('x'), KeyModifiers::ALT),
            Key::Alt('x')
        );
    }

    #[test]
    fn crossterm_special_keys() {
        assert_eq!(crossterm_to_key(KeyCode::Enter, KeyModifiers::NONE), Key::Enter);
        assert_eq!(crossterm_to_key(KeyCode::Esc, KeyModifiers::NONE), Key::Escape);
        assert_eq!(
            crossterm_to_key(KeyCode::Backspace, KeyModifiers::NONE),
            Key::Backspace
        );
        assert_eq!(crossterm_to_key(KeyCode::Home, KeyModifiers::NONE), Key::Home);
        assert_eq!(crossterm_to_key(KeyCode::F(2), KeyModifiers::NONE), Key::F(2));
    }

    #[test]
    fn crossterm_arrows() {
        assert_eq!(crossterm_to_key(KeyCode::Up, KeyModifiers::NONE), Key::Up);
        assert_eq!(crossterm_to_key(KeyCode::Down, KeyModifiers::NONE), Key::Down);
        assert_eq!(crossterm_to_key(KeyCode::Left, KeyModifiers::NONE), Key::Left);
        assert_eq!(crossterm_to_key(KeyCode::Right, KeyModifiers::NONE), Key::Right);
    }

    // --- Scroll ---

    #[test]
    fn scroll_stays_for_visible_selection() {
        let config = SiteConfig::default_site();
        assert_eq!(scroll_for_selection(&config, 0, 20, 0), 0);
        assert_eq!(scroll_for_selection(&config, 1, 20, 0), 0);
    }

    #[test]
    fn scroll_follows_selection_down() {
        let mut config = SiteConfig::default_site();
        for _ in 0..10 {
            config = store::append_section(&config, SectionKind::Text);
        }
        // Selecting the last section in a small viewport pushes the
        // offset past zero.
        let offset = scroll_for_selection(&config, config.sections.len() - 1, 8, 0);
        assert!(offset > 0);
    }

    #[test]
    fn scroll_follows_selection_back_up() {
        let mut config = SiteConfig::default_site();
        for _ in 0..10 {
            config = store::append_section(&config, SectionKind::Text);
        }
        let offset = scroll_for_selection(&config, 0, 8, 30);
        assert_eq!(offset, 0);
    }

    #[test]
    fn scroll_zero_viewport_is_zero() {
        let config = SiteConfig::default_site();
        assert_eq!(scroll_for_selection(&config, 0, 0, 5), 0);
    }

    #[test]
    fn scroll_out_of_range_selection_keeps_offset() {
        let config = SiteConfig::default_site();
        assert_eq!(scroll_for_selection(&config, 99, 10, 3), 3);
    }

    // --- Labels ---

    #[test]
    fn target_labels() {
        assert_eq!(target_label(&EditTarget::SiteTitle), "page title");
        assert_eq!(
            target_label(&EditTarget::SectionField {
                section_id: "s".into(),
                field: FieldKind::Image,
            }),
            "image"
        );
    }
}
