//! String rendering of a site — the non-interactive `pfg show` output.
//!
//! Renders the same composition as the editor (kind label, fields with
//! placeholder fallbacks, image resolution) into a plain `String` the
//! caller can print.

use pageforge_core::types::site::SiteConfig;

use crate::app::{fields_for, FieldKind};
use crate::section_view::display_field;


/// Render the whole site as plain text.
///
/// `year` is the current year, shown in the footer line the same way the
/// editor shows it.
pub fn render_site_text(config: &SiteConfig, year: i32) -> String {
    let mut out = String::new();

    out.push_str(&config.title);
    out.push('\n');
    out.push_str(&"=".repeat(config.title.chars().count().max(4)));
    out.push_str("\n\n");

    for section in &config.sections {
        out.push_str(&format!("[{}]\n", section.kind().label()));
        for &field in fields_for(section.kind()) {
            let value = display_field(&section.content, field);
            match field {
                FieldKind::Image => out.push_str(&format!("  image: {}\n", value)),
                _ => out.push_str(&format!("  {}\n", value)),
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("© {} {}\n", year, config.title));
    out
}
