//! Store operations — pure transitions over the site configuration.
//!
//! Every operation takes the current snapshot by reference and returns a
//! new snapshot; the input is never mutated. None of them are partial:
//! operations addressing a section id that does not exist return the
//! input unchanged rather than raising.
//!
//! The "page never empty" rule is deliberately NOT enforced here.
//! [`delete_section`] removes unconditionally, down to an empty list; the
//! guard lives with the UI affordance that exposes deletion.

use uuid::Uuid;

use crate::types::section::{ContentPatch, Section, SectionContent, SectionKind};
use crate::types::site::SiteConfig;


/// Generate a fresh section id.
///
/// UUID-v4 based, so new ids collide with nothing and never reuse the id
/// of a previously deleted section.
pub fn new_section_id() -> String {
    format!("section-{}", Uuid::new_v4())
}


/// Replace the page title. Empty titles are allowed.
pub fn set_title(config: &SiteConfig, title: &str) -> SiteConfig {
    SiteConfig {
        title: title.to_string(),
        sections: config.sections.clone(),
    }
}


/// Shallow-merge `patch` into the content of the section with `section_id`.
///
/// Only the targeted section changes, and within it only the fields the
/// patch carries. No matching section is a silent no-op.
pub fn patch_section(
    config: &SiteConfig,
    section_id: &str,
    patch: &ContentPatch,
) -> SiteConfig {
    SiteConfig {
        title: config.title.clone(),
        sections: config
            .sections
            .iter()
            .map(|section| {
                if section.id == section_id {
                    Section {
                        id: section.id.clone(),
                        content: section.content.merged(patch),
                    }
                } else {
                    section.clone()
                }
            })
            .collect(),
    }
}


/// Append a new section of `kind` with default content and a fresh id.
pub fn append_section(config: &SiteConfig, kind: SectionKind) -> SiteConfig {
    let mut sections = config.sections.clone();
    sections.push(Section {
        id: new_section_id(),
        content: SectionContent::default_for(kind),
    });
    SiteConfig {
        title: config.title.clone(),
        sections,
    }
}


/// Remove the section with `section_id`, preserving the order of the rest.
///
/// No matching section is a silent no-op. The removal is performed even
/// for the last remaining section; callers wanting a non-empty page must
/// guard before calling.
pub fn delete_section(config: &SiteConfig, section_id: &str) -> SiteConfig {
    SiteConfig {
        title: config.title.clone(),
        sections: config
            .sections
            .iter()
            .filter(|section| section.id != section_id)
            .cloned()
            .collect(),
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> SiteConfig {
        SiteConfig::default_site()
    }

    // --- set_title ---

    #[test]
    fn set_title_replaces_title() {
        let config = default_config();
        let updated = set_title(&config, "Renamed");
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.sections, config.sections);
    }

    #[test]
    fn set_title_allows_empty() {
        let updated = set_title(&default_config(), "");
        assert_eq!(updated.title, "");
    }

    #[test]
    fn set_title_does_not_mutate_input() {
        let config = default_config();
        let before = config.clone();
        let _ = set_title(&config, "Other");
        assert_eq!(config, before);
    }

    #[test]
    fn set_title_is_idempotent() {
        let config = default_config();
        let once = set_title(&config, "Same");
        let twice = set_title(&once, "Same");
        assert_eq!(once, twice);
    }

    // --- patch_section ---

    #[test]
    fn patch_changes_only_targeted_fields() {
        let config = default_config();
        let patch = ContentPatch::new().with_title("Patched");
        let updated = patch_section(&config, "hero", &patch);

        let hero = updated.section("hero").unwrap();
        assert_eq!(hero.content.title(), Some("Patched"));
        // Untouched fields of the target survive.
        assert_eq!(
            hero.content.subtitle(),
            config.section("hero").unwrap().content.subtitle()
        );
        // Every other section is identical to the input.
        assert_eq!(updated.sections[1], config.sections[1]);
        assert_eq!(updated.title, config.title);
    }

    #[test]
    fn patch_unknown_id_is_noop() {
        let config = default_config();
        let patch = ContentPatch::new().with_title("nope");
        let updated = patch_section(&config, "no-such-section", &patch);
        assert_eq!(updated, config);
    }

    #[test]
    fn patch_empty_is_noop() {
        let config = default_config();
        let updated = patch_section(&config, "hero", &ContentPatch::new());
        assert_eq!(updated, config);
    }

    #[test]
    fn patch_preserves_order() {
        let config = append_section(&default_config(), SectionKind::ImageText);
        let ids: Vec<String> = config.sections.iter().map(|s| s.id.clone()).collect();
        let patch = ContentPatch::new().with_body("changed");
        let updated = patch_section(&config, &ids[2], &patch);
        let updated_ids: Vec<String> =
            updated.sections.iter().map(|s| s.id.clone()).collect();
        assert_eq!(updated_ids, ids);
    }

    #[test]
    fn patch_image_src_on_image_text() {
        let config = append_section(&default_config(), SectionKind::ImageText);
        let id = config.sections[2].id.clone();
        let patch = ContentPatch::new().with_image_src("https://example.com/pic.png");
        let updated = patch_section(&config, &id, &patch);
        assert_eq!(
            updated.section(&id).unwrap().content.image_src(),
            Some("https://example.com/pic.png")
        );
    }

    // --- append_section ---

    #[test]
    fn append_grows_by_exactly_one() {
        let config = default_config();
        let updated = append_section(&config, SectionKind::Text);
        assert_eq!(updated.sections.len(), config.sections.len() + 1);
    }

    #[test]
    fn append_goes_to_the_end() {
        let config = default_config();
        let updated = append_section(&config, SectionKind::Hero);
        assert_eq!(updated.sections.last().unwrap().kind(), SectionKind::Hero);
        assert_eq!(updated.sections[..2], config.sections[..]);
    }

    #[test]
    fn append_id_is_fresh() {
        let config = default_config();
        let updated = append_section(&config, SectionKind::Text);
        let new_id = &updated.sections.last().unwrap().id;
        assert!(config.sections.iter().all(|s| &s.id != new_id));
        assert!(updated.ids_unique());
    }

    #[test]
    fn append_image_text_scenario() {
        // Default (hero + text) plus an image-text section: three sections,
        // the third image-text with non-empty defaults throughout.
        let updated = append_section(&default_config(), SectionKind::ImageText);
        assert_eq!(updated.sections.len(), 3);
        let third = &updated.sections[2];
        assert_eq!(third.kind(), SectionKind::ImageText);
        assert!(third.content.title().map_or(false, |t| !t.is_empty()));
        assert!(third.content.body().map_or(false, |b| !b.is_empty()));
        assert!(third.content.image_src().map_or(false, |i| !i.is_empty()));
    }

    #[test]
    fn repeated_appends_stay_unique() {
        let mut config = default_config();
        for _ in 0..10 {
            config = append_section(&config, SectionKind::Text);
        }
        assert_eq!(config.sections.len(), 12);
        assert!(config.ids_unique());
    }

    // --- delete_section ---

    #[test]
    fn delete_removes_in_place() {
        let config = append_section(&default_config(), SectionKind::Text);
        let middle_id = config.sections[1].id.clone();
        let updated = delete_section(&config, &middle_id);
        assert_eq!(updated.sections.len(), 2);
        assert_eq!(updated.sections[0].id, config.sections[0].id);
        assert_eq!(updated.sections[1].id, config.sections[2].id);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let config = default_config();
        let updated = delete_section(&config, "no-such-section");
        assert_eq!(updated, config);
    }

    #[test]
    fn delete_accepts_last_remaining_section() {
        // The store performs the removal even when it empties the page;
        // keeping one section on screen is the UI's job.
        let mut config = default_config();
        let ids: Vec<String> = config.sections.iter().map(|s| s.id.clone()).collect();
        for id in &ids {
            config = delete_section(&config, id);
        }
        assert!(config.sections.is_empty());
    }

    #[test]
    fn delete_then_append_never_reuses_id() {
        let config = default_config();
        let deleted_id = config.sections[1].id.clone();
        let mut current = delete_section(&config, &deleted_id);
        for _ in 0..5 {
            current = append_section(&current, SectionKind::Text);
        }
        assert!(current.sections.iter().all(|s| s.id != deleted_id));
    }

    // --- new_section_id ---

    #[test]
    fn section_ids_have_prefix() {
        assert!(new_section_id().starts_with("section-"));
    }

    #[test]
    fn section_ids_are_unique() {
        let a = new_section_id();
        let b = new_section_id();
        assert_ne!(a, b);
    }
}
