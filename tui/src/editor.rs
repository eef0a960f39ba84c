//! Inline field editing — the draft/commit/cancel contract.
//!
//! A [`FieldEditor`] is seeded from a field's current committed value and
//! holds the draft in an [`InputLine`]. Committing consumes the editor and
//! yields the draft for the bound change route; the UI then redisplays the
//! value from the updated snapshot. Cancelling discards the draft without
//! firing anything.
//!
//! Image references get the same contract plus resolution: a reference
//! that is neither a parseable URL nor an absolute path displays as the
//! placeholder, in both committed display and the live edit preview.

use pageforge_core::types::section::PLACEHOLDER_IMAGE;
use url::Url;

use crate::app::EditTarget;
use crate::input::InputLine;


// ---------------------------------------------------------------------------
// FieldEditor
// ---------------------------------------------------------------------------

/// An in-progress inline edit of a single field.
pub struct FieldEditor {
    target: EditTarget,
    pub line: InputLine,
}

impl FieldEditor {
    /// Begin editing `target`, seeding the draft from `committed`.
    pub fn begin(target: EditTarget, committed: &str) -> Self {
        FieldEditor {
            target,
            line: InputLine::seeded(committed),
        }
    }

    /// The field being edited.
    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    /// The current draft text.
    pub fn draft(&self) -> String {
        self.line.text()
    }

    /// Whether this edit targets an image reference.
    pub fn is_image(&self) -> bool {
        matches!(
            self.target,
            EditTarget::SectionField {
                field: crate::app::FieldKind::Image,
                ..
            }
        )
    }

    /// Commit: consume the editor, yielding the target and the draft.
    pub fn commit(self) -> (EditTarget, String) {
        (self.target, self.line.text())
    }
}


// ---------------------------------------------------------------------------
// Image reference resolution
// ---------------------------------------------------------------------------

/// Whether an image reference resolves to something displayable.
///
/// A reference resolves when it parses as a URL or is an absolute path.
pub fn reference_resolves(src: &str) -> bool {
    if src.is_empty() {
        return false;
    }
    if src.starts_with('/') {
        return true;
    }
    Url::parse(src).is_ok()
}

/// The reference to display for `src`: the reference itself when it
/// resolves, otherwise the placeholder.
pub fn resolve_image(src: Option<&str>) -> &str {
    match src {
        Some(s) if reference_resolves(s) => s,
        _ => PLACEHOLDER_IMAGE,
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
