//! Plain-data types shared across the workspace.

pub mod section;
pub mod site;

pub use section::{ContentPatch, Section, SectionContent, SectionKind, PLACEHOLDER_IMAGE};
pub use site::SiteConfig;
