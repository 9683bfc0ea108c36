use crate::command::{Command, CommandInvocation};

/// Extract the user-supplied arguments from a full invocation vector.
///
/// The vector is expected in the hosted shape `[runtime, program, args...]`;
/// the two leading slots are dropped and the rest is returned in order. A
/// vector with fewer than two elements yields an empty result rather than an
/// error — degenerate input is still valid input.
pub fn parse_arguments(raw: &[String]) -> Vec<String> {
    raw.get(2..).unwrap_or(&[]).to_vec()
}

/// Classify a single token as a [`Command`].
///
/// Recognized names match case-insensitively. Unrecognized tokens become
/// [`Command::Unknown`] carrying the original casing, not the lowered form.
pub fn command_of_string(token: &str) -> Command {
    match token.to_ascii_lowercase().as_str() {
        "help" => Command::Help,
        "install" => Command::Install,
        "init" => Command::Init,
        _ => Command::Unknown(token.to_string()),
    }
}

/// Split an argument list into a classified command and its residual arguments.
///
/// An empty list classifies as `Unknown("")` with no residual arguments. That
/// empty payload is distinct from an actually unrecognized word; callers must
/// not assume `Unknown` carries a non-empty token.
pub fn get_command(args: &[String]) -> CommandInvocation {
    match args.split_first() {
        Some((first, rest)) => CommandInvocation {
            command: command_of_string(first),
            args: rest.to_vec(),
        },
        None => CommandInvocation {
            command: Command::Unknown(String::new()),
            args: Vec::new(),
        },
    }
}
