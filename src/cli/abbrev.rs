// Command abbreviation matching for the interactive prompt

use crate::utils::resolve_prefix;

/// Commands accepted at the game prompt
pub const INTERACTIVE_COMMANDS: &[&str] = &[
    "place", "grab", "drop", "release", "check", "reset", "hint", "board", "status", "log",
    "help", "quit",
];

/// Expand the command word of a prompt line.
/// The remaining tokens are passed through untouched.
pub fn expand_command_abbreviations(args: Vec<String>) -> Result<Vec<String>, String> {
    let mut args = args;
    if args.is_empty() {
        return Ok(args);
    }

    match resolve_prefix(&args[0], INTERACTIVE_COMMANDS) {
        Ok(full_cmd) => {
            args[0] = full_cmd.to_string();
            Ok(args)
        }
        Err(matches) if matches.is_empty() => Err(format!(
            "Unknown command '{}'. Type 'help' for a list of commands.",
            args[0]
        )),
        Err(matches) => Err(format!(
            "Ambiguous command '{}'. Did you mean one of: {}?",
            args[0],
            matches.join(", ")
        )),
    }
}
