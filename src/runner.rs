use crate::command::{Command, ExitCode};
use crate::executor::{CONFIG_FILE, CONFIG_TEMPLATE, exec_command};
use crate::installer::PackageInstaller;
use crate::parser::{get_command, parse_arguments};
use crate::system::System;
use std::path::Path;

/// Drives one invocation end to end: argument extraction, classification,
/// execution and reporting.
///
/// The runner performs no direct I/O. Output and file writes go through the
/// injected [`System`], package installs through the injected
/// [`PackageInstaller`], so the whole pipeline runs deterministically under
/// test with recording doubles.
///
/// Each call is independent; the runner keeps no state between runs.
pub struct Runner<S> {
    system: S,
    installer: Box<dyn PackageInstaller>,
}

impl<S: System> Runner<S> {
    /// Create a runner over the given collaborators.
    pub fn new(system: S, installer: Box<dyn PackageInstaller>) -> Self {
        Self { system, installer }
    }

    /// Execute a full invocation vector of the hosted shape
    /// `[runtime, program, args...]`.
    pub fn run(&mut self, raw_argv: &[String]) -> ExitCode {
        let args = parse_arguments(raw_argv);
        self.dispatch(&args)
    }

    /// Execute already-extracted user arguments.
    ///
    /// The installed binary's argv carries a single program slot, so its
    /// entry point strips that itself and starts here.
    pub fn dispatch(&mut self, args: &[String]) -> ExitCode {
        let invocation = get_command(args);

        // The config write happens before anything is logged.
        if invocation.command == Command::Init {
            if let Err(error) = self.system.write_file(Path::new(CONFIG_FILE), CONFIG_TEMPLATE) {
                self.system.log(&format!("{:#}", error));
                return 1;
            }
        }

        match exec_command(&invocation, self.installer.as_ref()) {
            Ok(message) => {
                self.system.log(&message);
                0
            }
            Err(error) => {
                self.system.log(&error.to_string());
                1
            }
        }
    }

    /// Give the system back, so tests can inspect a recording double.
    pub fn into_system(self) -> S {
        self.system
    }
}
