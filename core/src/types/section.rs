//! Section model — the content blocks a page is built from.
//!
//! A page is an ordered list of [`Section`]s. Each section has a stable,
//! unique id and a [`SectionContent`] payload. Content is a tagged union
//! keyed by the section type, so a hero block cannot carry a body and a
//! text block cannot carry an image: fields that would be meaningless for
//! a layout are unrepresentable.
//!
//! # Persisted shape
//!
//! Sections serialize with the type tag and content payload adjacent to
//! the id, matching the stored layout:
//!
//! ```json
//! {"id": "hero", "type": "hero", "content": {"title": "...", "imageSrc": "..."}}
//! {"id": "section-<uuid>", "type": "text", "content": {"title": "...", "text": "..."}}
//! ```
//!
//! All content fields are optional. An absent field renders a placeholder
//! at display time; the absence itself is what persists.

use serde::{Deserialize, Serialize};


/// The image reference substituted whenever a section has no image of its
/// own, and displayed whenever a reference fails to resolve.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";


// ---------------------------------------------------------------------------
// SectionKind
// ---------------------------------------------------------------------------

/// The three section layouts a page can contain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    Text,
    ImageText,
}

impl SectionKind {
    /// All kinds, in the order the add-section chooser presents them.
    pub const ALL: [SectionKind; 3] =
        [SectionKind::Hero, SectionKind::Text, SectionKind::ImageText];

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero",
            SectionKind::Text => "Text",
            SectionKind::ImageText => "Image + text",
        }
    }

    /// One-line description shown in the add-section chooser.
    pub fn description(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Large heading with an image",
            SectionKind::Text => "A block of text content",
            SectionKind::ImageText => "An image beside text",
        }
    }
}


// ---------------------------------------------------------------------------
// SectionContent
// ---------------------------------------------------------------------------

/// Content payload of a section, keyed by layout type.
///
/// Serialized adjacently tagged: the `"type"` key selects the variant and
/// the `"content"` key holds its fields. Field names keep the persisted
/// spelling (`text` for body, `imageSrc` for the image reference).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum SectionContent {
    Hero {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "imageSrc")]
        image_src: Option<String>,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "text")]
        body: Option<String>,
    },
    ImageText {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "text")]
        body: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "imageSrc")]
        image_src: Option<String>,
    },
}

impl SectionContent {
    /// The default content a freshly added section of `kind` starts with.
    pub fn default_for(kind: SectionKind) -> SectionContent {
        match kind {
            SectionKind::Hero => SectionContent::Hero {
                title: Some("New heading".into()),
                subtitle: Some("New subheading".into()),
                image_src: Some(PLACEHOLDER_IMAGE.into()),
            },
            SectionKind::Text => SectionContent::Text {
                title: Some("New section".into()),
                body: Some("Click to edit this text.".into()),
            },
            SectionKind::ImageText => SectionContent::ImageText {
                title: Some("Heading with image".into()),
                body: Some("Text beside the image. Click to edit.".into()),
                image_src: Some(PLACEHOLDER_IMAGE.into()),
            },
        }
    }

    /// The layout type of this content.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Hero { .. } => SectionKind::Hero,
            SectionContent::Text { .. } => SectionKind::Text,
            SectionContent::ImageText { .. } => SectionKind::ImageText,
        }
    }

    // -------------------------------------------------------------------
    // Field accessors
    // -------------------------------------------------------------------

    /// The committed title, if set.
    pub fn title(&self) -> Option<&str> {
        match self {
            SectionContent::Hero { title, .. }
            | SectionContent::Text { title, .. }
            | SectionContent::ImageText { title, .. } => title.as_deref(),
        }
    }

    /// The committed subtitle, if set. Only hero sections carry one.
    pub fn subtitle(&self) -> Option<&str> {
        match self {
            SectionContent::Hero { subtitle, .. } => subtitle.as_deref(),
            _ => None,
        }
    }

    /// The committed body text, if set.
    pub fn body(&self) -> Option<&str> {
        match self {
            SectionContent::Text { body, .. }
            | SectionContent::ImageText { body, .. } => body.as_deref(),
            SectionContent::Hero { .. } => None,
        }
    }

    /// The committed image reference, if set.
    pub fn image_src(&self) -> Option<&str> {
        match self {
            SectionContent::Hero { image_src, .. }
            | SectionContent::ImageText { image_src, .. } => image_src.as_deref(),
            SectionContent::Text { .. } => None,
        }
    }

    /// Return a copy with `patch` shallow-merged in.
    ///
    /// Fields present in the patch overwrite; absent fields keep their
    /// prior value. Patch fields that do not exist on this variant are
    /// ignored — the variant never changes.
    pub fn merged(&self, patch: &ContentPatch) -> SectionContent {
        match self {
            SectionContent::Hero { title, subtitle, image_src } => SectionContent::Hero {
                title: patch.title.clone().or_else(|| title.clone()),
                subtitle: patch.subtitle.clone().or_else(|| subtitle.clone()),
                image_src: patch.image_src.clone().or_else(|| image_src.clone()),
            },
            SectionContent::Text { title, body } => SectionContent::Text {
                title: patch.title.clone().or_else(|| title.clone()),
                body: patch.body.clone().or_else(|| body.clone()),
            },
            SectionContent::ImageText { title, body, image_src } => {
                SectionContent::ImageText {
                    title: patch.title.clone().or_else(|| title.clone()),
                    body: patch.body.clone().or_else(|| body.clone()),
                    image_src: patch.image_src.clone().or_else(|| image_src.clone()),
                }
            }
        }
    }
}


// ---------------------------------------------------------------------------
// ContentPatch
// ---------------------------------------------------------------------------

/// A shallow-merge patch for section content.
///
/// `None` means "leave the field alone"; `Some` overwrites it. Built with
/// the `with_*` constructors, typically carrying exactly one field per
/// inline-edit commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub image_src: Option<String>,
}

impl ContentPatch {
    /// An empty patch — merging it changes nothing.
    pub fn new() -> Self {
        ContentPatch::default()
    }

    /// Set the title field.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the subtitle field.
    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    /// Set the body text field.
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Set the image reference field.
    pub fn with_image_src(mut self, src: &str) -> Self {
        self.image_src = Some(src.to_string());
        self
    }
}


// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One content block of the page: a stable id plus typed content.
///
/// Ids are unique within a site and never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    #[serde(flatten)]
    pub content: SectionContent,
}

impl Section {
    /// Create a section with the given id and content.
    pub fn new(id: &str, content: SectionContent) -> Self {
        Section {
            id: id.to_string(),
            content,
        }
    }

    /// The layout type of this section.
    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
