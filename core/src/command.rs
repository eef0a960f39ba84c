//! Command — the typed interface for everything the `pfg` binary can do.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `edit` | Launch the interactive editor (the default) |
//! | `show` | Print the persisted site (`--format json` or text) |
//! | `reset` | Overwrite the slot with the default site |
//! | `path` | Print the storage slot path |
//! | `help` | Print usage, optionally for one topic |
//! | `version` | Print the version |


/// A parsed invocation of the `pfg` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Launch the interactive editor.
    Edit,
    /// Print the persisted site. `format` is `"json"` or `"text"` (default).
    Show { format: Option<String> },
    /// Overwrite the slot with the built-in default site.
    Reset,
    /// Print the storage slot path.
    Path,
    /// Print usage, optionally for a single topic.
    Help { topic: Option<String> },
    /// Print the version.
    Version,
}


/// Top-level usage text.
pub fn usage() -> &'static str {
    "Usage: pfg [command]\n\
     \n\
     Commands:\n\
     \x20 edit               Open the site editor (default)\n\
     \x20 show [--format f]  Print the saved site (text or json)\n\
     \x20 reset              Replace the saved site with the defaults\n\
     \x20 path               Print where the site is stored\n\
     \x20 help [topic]       Show help, optionally for one command\n\
     \x20 version            Print the version\n\
     \n\
     Environment:\n\
     \x20 PAGEFORGE_CONFIG_DIR  Override the config directory"
}


/// Help text for a single topic, falling back to the top-level usage.
pub fn help_for(topic: Option<&str>) -> String {
    match topic {
        Some("edit") => "pfg edit\n\
             \n\
             Open the terminal editor. Keys:\n\
             \x20 j/k     select section     h/l  select field\n\
             \x20 e/Enter edit field         t    edit page title\n\
             \x20 a       add a section      d    delete section\n\
             \x20 s       save the site      q    quit"
            .into(),
        Some("show") => "pfg show [--format text|json]\n\
             \n\
             Print the saved site without opening the editor."
            .into(),
        Some("reset") => "pfg reset\n\
             \n\
             Replace the saved site with the built-in default page\n\
             (a hero section and a text section)."
            .into(),
        Some("path") => "pfg path\n\
             \n\
             Print the path of the JSON slot the site is saved to."
            .into(),
        Some(other) => format!("No help for '{}'.\n\n{}", other, usage()),
        None => usage().into(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_mentions_all_commands() {
        let text = usage();
        for cmd in ["edit", "show", "reset", "path", "help", "version"] {
            assert!(text.contains(cmd), "usage is missing '{}'", cmd);
        }
    }

    #[test]
    fn help_for_known_topics() {
        assert!(help_for(Some("edit")).contains("editor"));
        assert!(help_for(Some("show")).contains("--format"));
        assert!(help_for(Some("reset")).contains("default"));
        assert!(help_for(Some("path")).contains("slot"));
    }

    #[test]
    fn help_for_unknown_topic_falls_back() {
        let text = help_for(Some("bogus"));
        assert!(text.contains("No help for 'bogus'"));
        assert!(text.contains("Usage:"));
    }

    #[test]
    fn help_for_none_is_usage() {
        assert_eq!(help_for(None), usage());
    }
}
