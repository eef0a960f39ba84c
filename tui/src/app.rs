//! Main TUI application state machine.
//!
//! Manages the editing mode, section/field selection, the inline editor
//! lifecycle, and input routing. The `App` struct is the top-level owner
//! of all UI state — it does not perform I/O and never touches the
//! persisted slot; it only tracks what the user is looking at and what
//! they have typed, and emits [`AppAction`]s for the event loop to apply.

use pageforge_core::types::section::{ContentPatch, SectionKind};
use pageforge_core::types::site::SiteConfig;

use crate::editor::FieldEditor;
use crate::section_view;


// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// An editable field within a section's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Title,
    Subtitle,
    Body,
    Image,
}

impl FieldKind {
    /// Short label shown next to the field and in the edit prompt.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Subtitle => "subtitle",
            FieldKind::Body => "text",
            FieldKind::Image => "image",
        }
    }
}


/// The editable fields of a section layout, in display order.
pub fn fields_for(kind: SectionKind) -> &'static [FieldKind] {
    match kind {
        SectionKind::Hero => &[FieldKind::Title, FieldKind::Subtitle, FieldKind::Image],
        SectionKind::Text => &[FieldKind::Title, FieldKind::Body],
        SectionKind::ImageText => &[FieldKind::Image, FieldKind::Title, FieldKind::Body],
    }
}


// ---------------------------------------------------------------------------
// EditTarget
// ---------------------------------------------------------------------------

/// The field an inline edit is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// The page title in the header.
    SiteTitle,
    /// A content field of one section.
    SectionField {
        section_id: String,
        field: FieldKind,
    },
}


// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// What the user is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Navigating sections and fields.
    Browse,
    /// An inline edit is in progress (the editor holds target and draft).
    Edit,
    /// The add-section chooser is open.
    AddSection,
    /// A delete is awaiting confirmation.
    ConfirmDelete { section_id: String },
    /// The help overlay is open.
    Help,
}

impl Mode {
    /// Short label for the current mode, shown in the footer.
    pub fn label(&self) -> &str {
        match self {
            Mode::Browse => "browse",
            Mode::Edit => "edit",
            Mode::AddSection => "add",
            Mode::ConfirmDelete { .. } => "confirm",
            Mode::Help => "help",
        }
    }
}


// ---------------------------------------------------------------------------
// AppAction
// ---------------------------------------------------------------------------

/// An action produced by the state machine for the event loop to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Replace the page title.
    SetTitle(String),
    /// Patch one section's content.
    Patch {
        section_id: String,
        patch: ContentPatch,
    },
    /// Append a new section of the given kind.
    Append(SectionKind),
    /// Delete a section (already confirmed).
    Delete(String),
    /// Persist the current configuration.
    Save,
    /// Quit the editor.
    Quit,
}


// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level UI state for the Pageforge editor.
///
/// Owns the mode, the section/field selection, the add-section choice,
/// and the in-progress inline edit. Does not own the site configuration;
/// key handling borrows the current snapshot for context.
pub struct App {
    pub mode: Mode,
    /// Index of the selected section.
    pub selected: usize,
    /// Index of the focused field within the selected section.
    pub field_index: usize,
    /// Index into [`SectionKind::ALL`] in the add-section chooser.
    pub add_choice: usize,
    /// The in-progress inline edit, present only in `Mode::Edit`.
    pub editor: Option<FieldEditor>,
}


impl App {
    /// Create a new App in browse mode with the first section selected.
    pub fn new() -> Self {
        App {
            mode: Mode::Browse,
            selected: 0,
            field_index: 0,
            add_choice: 0,
            editor: None,
        }
    }

    // -------------------------------------------------------------------
    // Selection helpers
    // -------------------------------------------------------------------

    /// Move the section selection down, clamping to the last section.
    pub fn select_next(&mut self, config: &SiteConfig) {
        if self.selected + 1 < config.sections.len() {
            self.selected += 1;
            self.field_index = 0;
        }
    }

    /// Move the section selection up, clamping to 0.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.field_index = 0;
        }
    }

    /// Clamp the selection after the section list changed.
    pub fn clamp_selection(&mut self, config: &SiteConfig) {
        if config.sections.is_empty() {
            self.selected = 0;
            self.field_index = 0;
            return;
        }
        if self.selected >= config.sections.len() {
            self.selected = config.sections.len() - 1;
            self.field_index = 0;
        }
    }

    /// The field currently focused in the selected section.
    pub fn current_field(&self, config: &SiteConfig) -> Option<FieldKind> {
        let section = config.sections.get(self.selected)?;
        let fields = fields_for(section.kind());
        Some(fields[self.field_index.min(fields.len() - 1)])
    }

    fn field_next(&mut self, config: &SiteConfig) {
        if let Some(section) = config.sections.get(self.selected) {
            let max = fields_for(section.kind()).len() - 1;
            if self.field_index < max {
                self.field_index += 1;
            }
        }
    }

    fn field_prev(&mut self) {
        self.field_index = self.field_index.saturating_sub(1);
    }

    // -------------------------------------------------------------------
    // Input processing
    // -------------------------------------------------------------------

    /// Process a key event against the current configuration snapshot.
    ///
    /// Routing depends on the mode: editing routes keys into the draft
    /// line, dialogs handle only their own keys, browse mode handles
    /// navigation and the command keys.
    pub fn handle_key(&mut self, key: Key, config: &SiteConfig) -> Option<AppAction> {
        match &self.mode {
            Mode::Browse => self.handle_browse_key(key, config),
            Mode::Edit => self.handle_edit_key(key),
            Mode::AddSection => self.handle_add_key(key),
            Mode::ConfirmDelete { .. } => self.handle_confirm_key(key),
            Mode::Help => self.handle_help_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: Key, config: &SiteConfig) -> Option<AppAction> {
        match key {
            Key::Char('q') => Some(AppAction::Quit),
            Key::Char('s') => Some(AppAction::Save),
            Key::Char('?') => {
                self.mode = Mode::Help;
                None
            }
            Key::Char('j') | Key::Down => {
                self.select_next(config);
                None
            }
            Key::Char('k') | Key::Up => {
                self.select_prev();
                None
            }
            Key::Char('g') | Key::Home => {
                self.selected = 0;
                self.field_index = 0;
                None
            }
            Key::Char('G') | Key::End => {
                self.selected = config.sections.len().saturating_sub(1);
                self.field_index = 0;
                None
            }
            Key::Char('l') | Key::Right => {
                self.field_next(config);
                None
            }
            Key::Char('h') | Key::Left => {
                self.field_prev();
                None
            }
            Key::Char('t') => {
                self.editor = Some(FieldEditor::begin(EditTarget::SiteTitle, &config.title));
                self.mode = Mode::Edit;
                None
            }
            Key::Char('e') | Key::Enter => {
                self.begin_field_edit(config);
                None
            }
            Key::Char('a') => {
                // Preselect the text layout, the most common choice.
                self.add_choice = 1;
                self.mode = Mode::AddSection;
                None
            }
            Key::Char('d') => {
                // The delete affordance only exists while more than one
                // section remains; the page is never left empty.
                if config.sections.len() > 1 {
                    if let Some(section) = config.sections.get(self.selected) {
                        self.mode = Mode::ConfirmDelete {
                            section_id: section.id.clone(),
                        };
                    }
                }
                None
            }
            _ => None,
        }
    }

    /// Begin editing the focused field of the selected section.
    ///
    /// The draft is seeded from the displayed value, so an absent field
    /// starts from its placeholder text, as the original widgets did.
    fn begin_field_edit(&mut self, config: &SiteConfig) {
        let Some(section) = config.sections.get(self.selected) else {
            return;
        };
        let Some(field) = self.current_field(config) else {
            return;
        };
        let seed = section_view::display_field(&section.content, field);
        self.editor = Some(FieldEditor::begin(
            EditTarget::SectionField {
                section_id: section.id.clone(),
                field,
            },
            &seed,
        ));
        self.mode = Mode::Edit;
    }

    fn handle_edit_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Escape => {
                // Cancel: the draft is discarded and no change fires.
                self.editor = None;
                self.mode = Mode::Browse;
                None
            }
            Key::Enter => {
                let editor = self.editor.take()?;
                self.mode = Mode::Browse;
                let (target, value) = editor.commit();
                Some(commit_action(target, value))
            }
            Key::Backspace => {
                if let Some(editor) = &mut self.editor {
                    editor.line.delete_back();
                }
                None
            }
            Key::Delete => {
                if let Some(editor) = &mut self.editor {
                    editor.line.delete_forward();
                }
                None
            }
            Key::Left => {
                if let Some(editor) = &mut self.editor {
                    editor.line.move_left();
                }
                None
            }
            Key::Right => {
                if let Some(editor) = &mut self.editor {
                    editor.line.move_right();
                }
                None
            }
            Key::Home | Key::Ctrl('a') => {
                if let Some(editor) = &mut self.editor {
                    editor.line.move_home();
                }
                None
            }
            Key::End | Key::Ctrl('e') => {
                if let Some(editor) = &mut self.editor {
                    editor.line.move_end();
                }
                None
            }
            Key::Ctrl('w') => {
                if let Some(editor) = &mut self.editor {
                    editor.line.delete_word_back();
                }
                None
            }
            Key::Ctrl('u') => {
                if let Some(editor) = &mut self.editor {
                    editor.line.clear();
                }
                None
            }
            Key::Char(ch) => {
                if let Some(editor) = &mut self.editor {
                    editor.line.insert(ch);
                }
                None
            }
            _ => None,
        }
    }

    fn handle_add_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Escape => {
                self.mode = Mode::Browse;
                None
            }
            Key::Enter => {
                let kind = SectionKind::ALL[self.add_choice];
                self.mode = Mode::Browse;
                Some(AppAction::Append(kind))
            }
            Key::Char('l') | Key::Right | Key::Char('j') | Key::Down => {
                if self.add_choice + 1 < SectionKind::ALL.len() {
                    self.add_choice += 1;
                }
                None
            }
            Key::Char('h') | Key::Left | Key::Char('k') | Key::Up => {
                self.add_choice = self.add_choice.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn handle_confirm_key(&mut self, key: Key) -> Option<AppAction> {
        let Mode::ConfirmDelete { section_id } = &self.mode else {
            return None;
        };
        let section_id = section_id.clone();
        match key {
            Key::Char('y') | Key::Char('Y') | Key::Enter => {
                self.mode = Mode::Browse;
                Some(AppAction::Delete(section_id))
            }
            Key::Char('n') | Key::Char('N') | Key::Escape => {
                self.mode = Mode::Browse;
                None
            }
            _ => None,
        }
    }

    fn handle_help_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Escape | Key::Enter | Key::Char('q') | Key::Char('?') => {
                self.mode = Mode::Browse;
                None
            }
            _ => None,
        }
    }
}


impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}


/// Map a committed edit to the store action it drives.
fn commit_action(target: EditTarget, value: String) -> AppAction {
    match target {
        EditTarget::SiteTitle => AppAction::SetTitle(value),
        EditTarget::SectionField { section_id, field } => {
            let patch = match field {
                FieldKind::Title => ContentPatch::new().with_title(&value),
                FieldKind::Subtitle => ContentPatch::new().with_subtitle(&value),
                FieldKind::Body => ContentPatch::new().with_body(&value),
                FieldKind::Image => ContentPatch::new().with_image_src(&value),
            };
            AppAction::Patch { section_id, patch }
        }
    }
}


// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A simplified key event for the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Escape,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Ctrl(char),
    Alt(char),
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_core::data::store;
    use pageforge_core::types::section::{Section, SectionContent};

    fn config() -> SiteConfig {
        SiteConfig::default_site()
    }

    fn three_section_config() -> SiteConfig {
        store::append_section(&config(), SectionKind::ImageText)
    }

    // --- Construction ---

    #[test]
    fn new_starts_browsing_first_section() {
        let app = App::new();
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.selected, 0);
        assert_eq!(app.field_index, 0);
        assert!(app.editor.is_none());
    }

    #[test]
    fn default_is_new() {
        assert_eq!(App::default().mode, Mode::Browse);
    }

    // --- Section selection ---

    #[test]
    fn j_selects_next_section() {
        let mut app = App::new();
        app.handle_key(Key::Char('j'), &config());
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn selection_clamps_at_last() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('j'), &cfg);
        app.handle_key(Key::Char('j'), &cfg);
        app.handle_key(Key::Char('j'), &cfg);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn k_selects_prev_and_clamps_at_zero() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('k'), &cfg);
        assert_eq!(app.selected, 0);
        app.handle_key(Key::Char('j'), &cfg);
        app.handle_key(Key::Char('k'), &cfg);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn g_and_shift_g_jump_to_ends() {
        let mut app = App::new();
        let cfg = three_section_config();
        app.handle_key(Key::Char('G'), &cfg);
        assert_eq!(app.selected, 2);
        app.handle_key(Key::Char('g'), &cfg);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn changing_section_resets_field_focus() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('l'), &cfg);
        assert_eq!(app.field_index, 1);
        app.handle_key(Key::Char('j'), &cfg);
        assert_eq!(app.field_index, 0);
    }

    #[test]
    fn clamp_selection_after_shrink() {
        let mut app = App::new();
        app.selected = 2;
        app.clamp_selection(&config());
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn clamp_selection_on_empty_config() {
        let mut app = App::new();
        app.selected = 1;
        let empty = SiteConfig {
            title: "T".into(),
            sections: vec![],
        };
        app.clamp_selection(&empty);
        assert_eq!(app.selected, 0);
    }

    // --- Field focus ---

    #[test]
    fn field_focus_cycles_within_section() {
        let mut app = App::new();
        let cfg = config();
        // Hero has three fields: title, subtitle, image.
        assert_eq!(app.current_field(&cfg), Some(FieldKind::Title));
        app.handle_key(Key::Char('l'), &cfg);
        assert_eq!(app.current_field(&cfg), Some(FieldKind::Subtitle));
        app.handle_key(Key::Char('l'), &cfg);
        assert_eq!(app.current_field(&cfg), Some(FieldKind::Image));
        app.handle_key(Key::Char('l'), &cfg);
        assert_eq!(app.current_field(&cfg), Some(FieldKind::Image));
    }

    #[test]
    fn field_focus_moves_back() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('l'), &cfg);
        app.handle_key(Key::Char('h'), &cfg);
        assert_eq!(app.current_field(&cfg), Some(FieldKind::Title));
    }

    #[test]
    fn image_text_leads_with_image_field() {
        let mut app = App::new();
        let cfg = three_section_config();
        app.handle_key(Key::Char('G'), &cfg);
        assert_eq!(app.current_field(&cfg), Some(FieldKind::Image));
    }

    #[test]
    fn fields_for_each_kind() {
        assert_eq!(fields_for(SectionKind::Hero).len(), 3);
        assert_eq!(fields_for(SectionKind::Text).len(), 2);
        assert_eq!(fields_for(SectionKind::ImageText).len(), 3);
    }

    // --- Title editing ---

    #[test]
    fn t_begins_title_edit_seeded_from_config() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('t'), &cfg);
        assert_eq!(app.mode, Mode::Edit);
        let editor = app.editor.as_ref().unwrap();
        assert_eq!(editor.target(), &EditTarget::SiteTitle);
        assert_eq!(editor.draft(), cfg.title);
    }

    #[test]
    fn title_commit_produces_set_title() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('t'), &cfg);
        app.handle_key(Key::Ctrl('u'), &cfg);
        for ch in "New name".chars() {
            app.handle_key(Key::Char(ch), &cfg);
        }
        let action = app.handle_key(Key::Enter, &cfg);
        assert_eq!(action, Some(AppAction::SetTitle("New name".into())));
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.editor.is_none());
    }

    #[test]
    fn edit_cancel_discards_draft_without_action() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('t'), &cfg);
        app.handle_key(Key::Char('x'), &cfg);
        let action = app.handle_key(Key::Escape, &cfg);
        assert!(action.is_none());
        assert!(app.editor.is_none());
        assert_eq!(app.mode, Mode::Browse);
    }

    // --- Field editing ---

    #[test]
    fn e_begins_field_edit_seeded_from_committed() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('e'), &cfg);
        assert_eq!(app.mode, Mode::Edit);
        let editor = app.editor.as_ref().unwrap();
        assert_eq!(editor.draft(), "Welcome to my site");
    }

    #[test]
    fn absent_field_seeds_placeholder_text() {
        let mut app = App::new();
        let cfg = SiteConfig {
            title: "T".into(),
            sections: vec![Section::new(
                "s1",
                SectionContent::Text {
                    title: None,
                    body: None,
                },
            )],
        };
        app.handle_key(Key::Char('e'), &cfg);
        let editor = app.editor.as_ref().unwrap();
        assert!(!editor.draft().is_empty());
    }

    #[test]
    fn field_commit_produces_single_field_patch() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('e'), &cfg);
        app.handle_key(Key::Ctrl('u'), &cfg);
        for ch in "Hello".chars() {
            app.handle_key(Key::Char(ch), &cfg);
        }
        let action = app.handle_key(Key::Enter, &cfg);
        let expected = AppAction::Patch {
            section_id: "hero".into(),
            patch: ContentPatch::new().with_title("Hello"),
        };
        assert_eq!(action, Some(expected));
    }

    #[test]
    fn image_field_commit_patches_image_src() {
        let mut app = App::new();
        let cfg = three_section_config();
        let image_section_id = cfg.sections[2].id.clone();
        app.handle_key(Key::Char('G'), &cfg);
        app.handle_key(Key::Char('e'), &cfg);
        assert!(app.editor.as_ref().unwrap().is_image());
        app.handle_key(Key::Ctrl('u'), &cfg);
        for ch in "https://example.com/x.png".chars() {
            app.handle_key(Key::Char(ch), &cfg);
        }
        let action = app.handle_key(Key::Enter, &cfg);
        let expected = AppAction::Patch {
            section_id: image_section_id,
            patch: ContentPatch::new().with_image_src("https://example.com/x.png"),
        };
        assert_eq!(action, Some(expected));
    }

    #[test]
    fn edit_mode_line_editing_keys() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('t'), &cfg);
        app.handle_key(Key::Ctrl('u'), &cfg);
        app.handle_key(Key::Char('a'), &cfg);
        app.handle_key(Key::Char('b'), &cfg);
        app.handle_key(Key::Backspace, &cfg);
        assert_eq!(app.editor.as_ref().unwrap().draft(), "a");
    }

    // --- Add section ---

    #[test]
    fn a_opens_chooser_with_text_preselected() {
        let mut app = App::new();
        app.handle_key(Key::Char('a'), &config());
        assert_eq!(app.mode, Mode::AddSection);
        assert_eq!(SectionKind::ALL[app.add_choice], SectionKind::Text);
    }

    #[test]
    fn chooser_navigation_clamps() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('a'), &cfg);
        app.handle_key(Key::Char('h'), &cfg);
        assert_eq!(SectionKind::ALL[app.add_choice], SectionKind::Hero);
        app.handle_key(Key::Char('h'), &cfg);
        assert_eq!(app.add_choice, 0);
        app.handle_key(Key::Char('l'), &cfg);
        app.handle_key(Key::Char('l'), &cfg);
        app.handle_key(Key::Char('l'), &cfg);
        assert_eq!(SectionKind::ALL[app.add_choice], SectionKind::ImageText);
    }

    #[test]
    fn chooser_enter_appends_selected_kind() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('a'), &cfg);
        app.handle_key(Key::Char('l'), &cfg);
        let action = app.handle_key(Key::Enter, &cfg);
        assert_eq!(action, Some(AppAction::Append(SectionKind::ImageText)));
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn chooser_escape_cancels() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('a'), &cfg);
        let action = app.handle_key(Key::Escape, &cfg);
        assert!(action.is_none());
        assert_eq!(app.mode, Mode::Browse);
    }

    // --- Delete ---

    #[test]
    fn d_opens_confirmation_for_selected_section() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('j'), &cfg);
        app.handle_key(Key::Char('d'), &cfg);
        assert_eq!(
            app.mode,
            Mode::ConfirmDelete {
                section_id: cfg.sections[1].id.clone()
            }
        );
    }

    #[test]
    fn confirm_y_deletes() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('d'), &cfg);
        let action = app.handle_key(Key::Char('y'), &cfg);
        assert_eq!(action, Some(AppAction::Delete("hero".into())));
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn confirm_n_cancels() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('d'), &cfg);
        let action = app.handle_key(Key::Char('n'), &cfg);
        assert!(action.is_none());
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn confirm_other_key_ignored() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('d'), &cfg);
        let action = app.handle_key(Key::Char('x'), &cfg);
        assert!(action.is_none());
        assert!(matches!(app.mode, Mode::ConfirmDelete { .. }));
    }

    #[test]
    fn delete_blocked_for_last_section() {
        // The guard lives here, in the UI: with one section left the
        // delete key does nothing at all.
        let mut app = App::new();
        let cfg = SiteConfig {
            title: "T".into(),
            sections: vec![Section::new(
                "only",
                SectionContent::default_for(SectionKind::Text),
            )],
        };
        let action = app.handle_key(Key::Char('d'), &cfg);
        assert!(action.is_none());
        assert_eq!(app.mode, Mode::Browse);
    }

    // --- Save / quit / help ---

    #[test]
    fn s_saves() {
        let mut app = App::new();
        assert_eq!(app.handle_key(Key::Char('s'), &config()), Some(AppAction::Save));
    }

    #[test]
    fn q_quits() {
        let mut app = App::new();
        assert_eq!(app.handle_key(Key::Char('q'), &config()), Some(AppAction::Quit));
    }

    #[test]
    fn help_opens_and_closes() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('?'), &cfg);
        assert_eq!(app.mode, Mode::Help);
        app.handle_key(Key::Escape, &cfg);
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn help_ignores_other_keys() {
        let mut app = App::new();
        let cfg = config();
        app.handle_key(Key::Char('?'), &cfg);
        app.handle_key(Key::Char('x'), &cfg);
        assert_eq!(app.mode, Mode::Help);
    }

    // --- Mode labels ---

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::Browse.label(), "browse");
        assert_eq!(Mode::Edit.label(), "edit");
        assert_eq!(Mode::AddSection.label(), "add");
        assert_eq!(
            Mode::ConfirmDelete {
                section_id: "x".into()
            }
            .label(),
            "confirm"
        );
        assert_eq!(Mode::Help.label(), "help");
    }
}
