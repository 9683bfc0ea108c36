use crate::command::{Command, CommandInvocation, ExecError, ExecutionResult};
use crate::installer::PackageInstaller;
use argh::{EarlyExit, FromArgs};

/// The usage blurb printed by the `help` command.
pub const HELP_TEXT: &str = "here some help";

/// Path of the starter config written by `init`, relative to the current
/// working directory.
pub const CONFIG_FILE: &str = ".brewery.json";

/// Starter config content. Written as-is, never merged with an existing
/// file. The unquoted keys are part of the shipped format.
pub const CONFIG_TEMPLATE: &str = "{cask: [], brew: []}";

#[derive(FromArgs)]
/// Install a package with Homebrew.
struct InstallOpts {
    #[argh(positional, greedy)]
    /// packages to pass through; only the first one is installed
    packages: Vec<String>,
}

/// Execute a classified command.
///
/// Dispatch is pure apart from `Install`, which drives the injected
/// installer. `Init`'s persisted side effect belongs to the runner; here it
/// only reports the path that gets created.
pub fn exec_command(
    invocation: &CommandInvocation,
    installer: &dyn PackageInstaller,
) -> ExecutionResult {
    match &invocation.command {
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::Init => Ok(format!("{} created", CONFIG_FILE)),
        Command::Unknown(token) => Err(ExecError::UnknownCommand(token.clone())),
        Command::Install => {
            let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
            let opts = match InstallOpts::from_args(&["install"], &args) {
                Ok(opts) => opts,
                Err(EarlyExit { output, status }) => {
                    // argh wants to print and exit here; fold its generated
                    // text into an ordinary result instead.
                    return match status {
                        Ok(()) => Ok(output),
                        Err(()) => Err(ExecError::InvalidArgs(output)),
                    };
                }
            };
            let package = opts.packages.first().ok_or(ExecError::MissingPackage)?;
            let captured = installer.install(package)?;
            if captured.is_empty() {
                Ok(format!("installed {}", package))
            } else {
                Ok(captured)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Installer double that records calls and replays a fixed response.
    struct Scripted {
        calls: RefCell<Vec<String>>,
        response: Result<String, ExecError>,
    }

    impl Scripted {
        fn ok(output: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: Ok(output.to_string()),
            }
        }

        fn err(error: ExecError) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: Err(error),
            }
        }
    }

    impl PackageInstaller for Scripted {
        fn install(&self, package: &str) -> Result<String, ExecError> {
            self.calls.borrow_mut().push(package.to_string());
            self.response.clone()
        }
    }

    fn invocation(command: Command, args: &[&str]) -> CommandInvocation {
        CommandInvocation {
            command,
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn help_reports_the_static_text() {
        let installer = Scripted::ok("");
        let result = exec_command(&invocation(Command::Help, &[]), &installer);
        assert_eq!(result, Ok("here some help".to_string()));
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn unknown_carries_the_original_token() {
        let installer = Scripted::ok("");
        let result = exec_command(&invocation(Command::Unknown("frobnicate".into()), &[]), &installer);
        assert_eq!(result, Err(ExecError::UnknownCommand("frobnicate".to_string())));
    }

    #[test]
    fn install_without_a_package_is_an_explicit_error() {
        let installer = Scripted::ok("");
        let result = exec_command(&invocation(Command::Install, &[]), &installer);
        assert_eq!(result, Err(ExecError::MissingPackage));
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn install_routes_the_first_residual_arg_to_the_installer() {
        let installer = Scripted::ok("");
        let result = exec_command(&invocation(Command::Install, &["wget", "-y"]), &installer);
        assert_eq!(result, Ok("installed wget".to_string()));
        assert_eq!(*installer.calls.borrow(), vec!["wget".to_string()]);
    }

    #[test]
    fn install_reports_captured_output_when_present() {
        let installer = Scripted::ok("==> Pouring wget");
        let result = exec_command(&invocation(Command::Install, &["wget"]), &installer);
        assert_eq!(result, Ok("==> Pouring wget".to_string()));
    }

    #[test]
    fn install_failure_propagates() {
        let installer = Scripted::err(ExecError::Subprocess("brew blew up".to_string()));
        let result = exec_command(&invocation(Command::Install, &["wget"]), &installer);
        assert_eq!(result, Err(ExecError::Subprocess("brew blew up".to_string())));
    }

    #[test]
    fn install_help_flag_surfaces_the_generated_usage() {
        let installer = Scripted::ok("");
        let result = exec_command(&invocation(Command::Install, &["--help"]), &installer);
        let message = result.expect("--help is not a failure");
        assert!(message.contains("install"), "unexpected usage text: {}", message);
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn init_reports_the_config_path() {
        let installer = Scripted::ok("");
        let result = exec_command(&invocation(Command::Init, &[]), &installer);
        assert_eq!(result, Ok(".brewery.json created".to_string()));
    }
}
