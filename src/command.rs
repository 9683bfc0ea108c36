use std::fmt;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// The closed set of user intents this tool understands.
///
/// Classification is total: every input token maps to exactly one variant.
/// Recognized names are matched case-insensitively; anything else becomes
/// [`Command::Unknown`], which keeps the token in its original casing so the
/// output boundary can echo it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the usage blurb.
    Help,
    /// Install a package through the system package manager.
    Install,
    /// Write the starter config file to the current directory.
    Init,
    /// Anything that is not a recognized command name. An empty token means
    /// the user supplied no arguments at all, so the payload may be empty.
    Unknown(String),
}

/// A classified command paired with its residual arguments.
///
/// Built once per run from the raw arguments and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: Command,
    /// Arguments following the command name, in their original order.
    pub args: Vec<String>,
}

/// Outcome of executing a single command: a success message or a typed failure.
///
/// Each run produces exactly one of these. The runner reports the message in
/// both cases; the tag only decides the exit code.
pub type ExecutionResult = Result<String, ExecError>;

/// Everything that can go wrong while executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The first argument did not name a recognized command. Carries the
    /// offending token as the user typed it.
    UnknownCommand(String),
    /// `install` was invoked without a package name.
    MissingPackage,
    /// The residual arguments were rejected by the command's argument parser.
    /// Carries the generated diagnostic text.
    InvalidArgs(String),
    /// The package manager could not be started or did not exit successfully.
    Subprocess(String),
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::UnknownCommand(token) => write!(f, "I don't know {} command", token),
            ExecError::MissingPackage => write!(f, "install: missing package name"),
            ExecError::InvalidArgs(output) => f.write_str(output),
            ExecError::Subprocess(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for ExecError {}
