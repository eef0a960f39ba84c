//! pfg — the Pageforge command-line entry point.
//!
//! # Usage
//!
//! ```text
//! pfg                  # open the editor
//! pfg show             # print the saved site
//! pfg show --format json
//! pfg reset            # restore the default site
//! pfg path             # print the storage location
//! ```

use std::path::PathBuf;
use std::process;

use chrono::Datelike;
use pageforge_core::cli::parse_args;
use pageforge_core::command::{self, Command};
use pageforge_core::data::storage::Storage;
use pageforge_core::types::site::SiteConfig;


fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("pfg: {}", e);
            process::exit(1);
        }
    };

    let storage = Storage::in_dir(&resolve_config_dir());

    match cmd {
        Command::Edit => {
            match pfg_tui::tui::Tui::new(storage) {
                Ok(mut tui) => {
                    if let Err(e) = tui.run() {
                        eprintln!("pfg: {}", e);
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("pfg: failed to start editor: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::Show { format } => {
            let config = storage.load();
            match format.as_deref() {
                Some("json") => match serde_json::to_string_pretty(&config) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("pfg: {}", e);
                        process::exit(1);
                    }
                },
                _ => {
                    let year = chrono::Local::now().year();
                    print!("{}", pfg_tui::views::render_site_text(&config, year));
                }
            }
        }
        Command::Reset => {
            if let Err(e) = storage.save(&SiteConfig::default_site()) {
                eprintln!("pfg: {}", e);
                process::exit(1);
            }
            println!("Site reset to defaults at {}", storage.path().display());
        }
        Command::Path => {
            println!("{}", storage.path().display());
        }
        Command::Help { topic } => {
            println!("{}", command::help_for(topic.as_deref()));
        }
        Command::Version => {
            println!("pfg {}", env!("CARGO_PKG_VERSION"));
        }
    }
}


fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PAGEFORGE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("pageforge")
}


fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pageforge_core=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
