use crate::command::ExecError;
use std::ffi::OsString;
use std::process::ExitStatus;

/// Seam over the external package manager.
///
/// The executor only ever talks to this trait, so tests can script the
/// outcome instead of shelling out for real.
pub trait PackageInstaller {
    /// Install a single package, returning the captured output on success.
    fn install(&self, package: &str) -> Result<String, ExecError>;
}

/// Installs packages by running `brew install <package>` synchronously.
///
/// The call blocks until the subprocess exits. Both failure to spawn and a
/// failing exit status are captured into [`ExecError::Subprocess`] together
/// with whatever the subprocess wrote to stderr; neither is allowed to take
/// the host process down.
pub struct Homebrew {
    program: OsString,
}

impl Homebrew {
    /// Use an alternative executable in place of `brew`.
    ///
    /// Tests point this at small real binaries to exercise the capture paths.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Homebrew {
    fn default() -> Self {
        Self::with_program("brew")
    }
}

impl PackageInstaller for Homebrew {
    fn install(&self, package: &str) -> Result<String, ExecError> {
        let program = self.program.to_string_lossy().into_owned();
        let output = std::process::Command::new(&self.program)
            .arg("install")
            .arg(package)
            .output()
            .map_err(|e| ExecError::Subprocess(format!("can't run {}: {}", program, e)))?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string());
        }

        let code = match output.status.code() {
            Some(x) => x,
            None => terminated_by_signal(output.status),
        };
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim_end();
        if stderr.is_empty() {
            Err(ExecError::Subprocess(format!(
                "{} install {} exited with code {}",
                program, package, code
            )))
        } else {
            Err(ExecError::Subprocess(format!(
                "{} install {} exited with code {}: {}",
                program, package, code, stderr
            )))
        }
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}
