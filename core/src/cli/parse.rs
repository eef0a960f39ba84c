use crate::command::Command;


/// Parse CLI arguments into a typed Command.
///
/// Arguments are expected WITHOUT the program name (i.e., `args` should
/// be `["show", "--format", "json"]`, not `["pfg", "show", ...]`). No
/// arguments defaults to [`Command::Edit`] — running `pfg` bare opens
/// the editor, the way opening the original page did.
pub fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Ok(Command::Edit);
    }

    match args[0] {
        "edit" => Ok(Command::Edit),
        "show" => parse_show(args),
        "reset" => Ok(Command::Reset),
        "path" => Ok(Command::Path),
        "help" | "--help" | "-h" => parse_help(args),
        "version" | "--version" | "-V" => Ok(Command::Version),
        other => Err(format!(
            "Unknown command: '{}'. Run 'pfg help' for usage.",
            other
        )),
    }
}


// ---------------------------------------------------------------------------
// Sub-parsers
// ---------------------------------------------------------------------------

/// `pfg show [--format <text|json>]`
fn parse_show(args: &[&str]) -> Result<Command, String> {
    let mut format = None;
    let rest = &args[1..];
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            "--format" => {
                i += 1;
                let value = take_arg(rest, i, "--format")?;
                match value.as_str() {
                    "text" | "json" => format = Some(value),
                    other => {
                        return Err(format!(
                            "Unknown format: '{}'. Expected 'text' or 'json'.",
                            other
                        ))
                    }
                }
            }
            other => return Err(format!("Unknown flag for show: '{}'", other)),
        }
        i += 1;
    }
    Ok(Command::Show { format })
}

/// `pfg help [topic]`
fn parse_help(args: &[&str]) -> Result<Command, String> {
    let topic = if args.len() > 1 {
        Some(args[1].to_string())
    } else {
        None
    };
    Ok(Command::Help { topic })
}


/// Fetch the value following a flag, or error with the flag name.
fn take_arg(args: &[&str], index: usize, flag: &str) -> Result<String, String> {
    args.get(index)
        .map(|s| s.to_string())
        .ok_or_else(|| format!("Missing value for {}", flag))
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
