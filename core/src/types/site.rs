//! Site configuration — the full editable state of a page.
//!
//! `SiteConfig` is the serializable root type: a page title plus an
//! ordered list of sections. All fields are plain data, so the whole
//! configuration is one JSON document and snapshots are cheap clones.

use serde::{Deserialize, Serialize};

use crate::types::section::{Section, SectionContent, PLACEHOLDER_IMAGE};


/// The complete persisted and editable state of a page.
///
/// Section order is display order. Ids are unique within `sections` at
/// all times; every operation in [`crate::data::store`] preserves this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub sections: Vec<Section>,
}

impl SiteConfig {
    /// The built-in default site: one hero section and one text section.
    ///
    /// Used on first launch and whenever the persisted slot cannot be
    /// decoded. The hero keeps the literal id `"hero"`.
    pub fn default_site() -> SiteConfig {
        SiteConfig {
            title: "My editable site".into(),
            sections: vec![
                Section::new(
                    "hero",
                    SectionContent::Hero {
                        title: Some("Welcome to my site".into()),
                        subtitle: Some("You can edit any text or image here".into()),
                        image_src: Some(PLACEHOLDER_IMAGE.into()),
                    },
                ),
                Section::new(
                    "section-about",
                    SectionContent::Text {
                        title: Some("About us".into()),
                        body: Some(
                            "Tell visitors about your company or project here. \
                             Click the text to edit it."
                                .into(),
                        ),
                    },
                ),
            ],
        }
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Whether every section id is unique.
    pub fn ids_unique(&self) -> bool {
        let mut seen: Vec<&str> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            if seen.contains(&section.id.as_str()) {
                return false;
            }
            seen.push(&section.id);
        }
        true
    }
}
