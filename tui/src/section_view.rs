//! Section rendering — maps a section's type to its terminal layout.
//!
//! Each layout composes the same building blocks: a kind header, the
//! editable text fields, and an image line for layouts that carry one.
//! Absent fields render fixed placeholder strings; image references go
//! through [`crate::editor::resolve_image`] so unresolvable sources show
//! the placeholder marker. The pure helpers here return styled
//! [`Line`]s, which the event loop stacks into a scrollable paragraph.

use ratatui::prelude::*;

use pageforge_core::types::section::{Section, SectionContent, SectionKind};

use crate::app::{fields_for, FieldKind};
use crate::editor::resolve_image;
use crate::theme::Theme;


// Display placeholders for absent fields, by layout position.
const HERO_TITLE: &str = "Heading";
const HERO_SUBTITLE: &str = "Subheading";
const TEXT_TITLE: &str = "Section title";
const TEXT_BODY: &str = "Section content";
const IMAGE_TEXT_TITLE: &str = "Heading";
const IMAGE_TEXT_BODY: &str = "Description";


/// The displayed value of a field: the committed value, or the layout's
/// placeholder when the field is absent. Image fields resolve through
/// the placeholder fallback.
pub fn display_field(content: &SectionContent, field: FieldKind) -> String {
    match field {
        FieldKind::Title => content
            .title()
            .unwrap_or(match content.kind() {
                SectionKind::Hero => HERO_TITLE,
                SectionKind::Text => TEXT_TITLE,
                SectionKind::ImageText => IMAGE_TEXT_TITLE,
            })
            .to_string(),
        FieldKind::Subtitle => content.subtitle().unwrap_or(HERO_SUBTITLE).to_string(),
        FieldKind::Body => content
            .body()
            .unwrap_or(match content.kind() {
                SectionKind::ImageText => IMAGE_TEXT_BODY,
                _ => TEXT_BODY,
            })
            .to_string(),
        FieldKind::Image => resolve_image(content.image_src()).to_string(),
    }
}

/// Whether the displayed value is a placeholder rather than committed
/// content. Placeholder values render dimmed.
pub fn is_placeholder(content: &SectionContent, field: FieldKind) -> bool {
    match field {
        FieldKind::Title => content.title().is_none(),
        FieldKind::Subtitle => content.subtitle().is_none(),
        FieldKind::Body => content.body().is_none(),
        FieldKind::Image => content
            .image_src()
            .map_or(true, |src| !crate::editor::reference_resolves(src)),
    }
}


/// Context for rendering one section in the list.
pub struct SectionContext {
    pub selected: bool,
    /// The focused field, when this section is selected.
    pub focused_field: Option<FieldKind>,
    /// Whether the delete affordance is shown at all.
    pub can_delete: bool,
}


/// Render one section as styled lines.
///
/// Every layout yields its kind header first; hero content is centered,
/// the other layouts are left-aligned with the image line leading the
/// image-text layout.
pub fn section_lines(section: &Section, ctx: &SectionContext, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(section, ctx, theme)];
    let center = section.kind() == SectionKind::Hero;
    for &field in fields_for(section.kind()) {
        lines.push(field_line(&section.content, field, ctx, theme, center));
    }
    lines
}


/// The section's header: selection marker, kind label, and the delete
/// hint when deleting is possible and this section is selected.
fn header_line(section: &Section, ctx: &SectionContext, theme: &Theme) -> Line<'static> {
    let marker = if ctx.selected { "▸ " } else { "  " };
    let mut spans = vec![
        Span::styled(
            marker.to_string(),
            Style::default().fg(theme.selection.to_ratatui()),
        ),
        Span::styled(
            section.kind().label().to_string(),
            Style::default()
                .fg(theme.section_label.to_ratatui())
                .bold(),
        ),
    ];
    if ctx.selected && ctx.can_delete {
        spans.push(Span::styled(
            "  [d] delete".to_string(),
            Style::default().fg(theme.placeholder.to_ratatui()),
        ));
    }
    Line::from(spans)
}


/// One field of the section as a styled line.
fn field_line(
    content: &SectionContent,
    field: FieldKind,
    ctx: &SectionContext,
    theme: &Theme,
    center: bool,
) -> Line<'static> {
    let value = display_field(content, field);
    let text = match field {
        FieldKind::Image => format!("[image: {}]", value),
        _ => value,
    };

    let mut style = Style::default();
    if field == FieldKind::Title {
        style = style.bold();
    }
    if is_placeholder(content, field) {
        style = style.fg(theme.placeholder.to_ratatui());
    }
    let focused = ctx.selected && ctx.focused_field == Some(field);
    if focused {
        style = style.fg(theme.field_focus.to_ratatui()).underlined();
    }

    let prefix = if focused { "    ● " } else { "      " };
    let line = Line::from(vec![
        Span::raw(prefix.to_string()),
        Span::styled(text, style),
    ]);
    if center {
        line.centered()
    } else {
        line
    }
}


/// Total rendered height of a section, including its header line.
pub fn section_height(kind: SectionKind) -> usize {
    1 + fields_for(kind).len()
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
