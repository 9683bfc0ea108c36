use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Capability boundary between the runner and the outside world.
///
/// The runner performs no direct I/O; everything observable goes through this
/// trait, so tests can substitute a recording implementation and assert on
/// exactly what would have been printed or persisted.
pub trait System {
    /// Write one line to the user-facing output channel.
    fn log(&mut self, line: &str);

    /// Persist `content` at `path`, replacing any existing file.
    fn write_file(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// The real thing: lines go to stdout, files go to the filesystem.
pub struct Console;

impl System for Console {
    fn log(&mut self, line: &str) {
        println!("{}", line);
    }

    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).with_context(|| format!("can't write {}", path.display()))
    }
}

/// In-memory implementation that records every call.
///
/// Public so integration-style tests in other modules can construct it.
#[derive(Debug, Default)]
pub struct Recording {
    /// Logged lines, in order.
    pub lines: Vec<String>,
    /// Written files as `(path, content)` pairs, in order.
    pub files: Vec<(PathBuf, String)>,
}

impl System for Recording {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_captures_calls_in_order() {
        let mut system = Recording::default();
        system.log("first");
        system.log("second");
        system
            .write_file(Path::new("a.json"), "{}")
            .expect("recording writes are infallible");

        assert_eq!(system.lines, vec!["first", "second"]);
        assert_eq!(
            system.files,
            vec![(PathBuf::from("a.json"), "{}".to_string())]
        );
    }
}
