// src/system/clipboard.rs
use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Destination for a generated password outside the terminal.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// An external program that reads the text on stdin and keeps serving the
/// selection after `passgen` exits (`xclip`, `xsel`, `wl-copy`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardHelper {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardHelper {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn pipe(&self, text: &str) -> io::Result<bool> {
        // Helpers fork a daemon that inherits these handles; keep it off our stdout
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;
        Ok(status.success())
    }
}

/// Clipboard backed by the first helper program that accepts the text.
///
/// Success is only reported once a helper exited cleanly, which for the
/// desktop helpers means the selection owner lives on in the background.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    helpers: Vec<ClipboardHelper>,
}

impl CommandClipboard {
    pub fn new(helpers: Vec<ClipboardHelper>) -> Self {
        Self { helpers }
    }

    /// Helpers for the current desktop session.
    pub fn desktop() -> Self {
        Self::for_session(env::var_os("WAYLAND_DISPLAY").is_some())
    }

    pub fn for_session(wayland: bool) -> Self {
        let mut helpers = Vec::new();
        if wayland {
            helpers.push(ClipboardHelper::new("wl-copy", &[]));
        }
        helpers.push(ClipboardHelper::new("xclip", &["-selection", "clipboard", "-in"]));
        helpers.push(ClipboardHelper::new("xsel", &["--clipboard", "--input"]));
        Self::new(helpers)
    }

    pub fn helpers(&self) -> &[ClipboardHelper] {
        &self.helpers
    }
}

impl ClipboardSink for CommandClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut last_failure = None;

        for helper in &self.helpers {
            match helper.pipe(text) {
                Ok(true) => {
                    log::debug!("Clipboard set through {}", helper.program);
                    return Ok(());
                }
                Ok(false) => {
                    last_failure = Some(format!("{} exited with an error", helper.program));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("Clipboard helper {} not installed", helper.program);
                }
                Err(e) => {
                    last_failure = Some(format!("{}: {}", helper.program, e));
                }
            }
        }

        match last_failure {
            Some(reason) => Err(ClipboardError::Write(reason)),
            None => {
                let tried: Vec<&str> = self.helpers.iter().map(|h| h.program.as_str()).collect();
                Err(ClipboardError::Unavailable(format!(
                    "no clipboard helper found (tried {})",
                    tried.join(", ")
                )))
            }
        }
    }
}

/// The desktop clipboard of the current session.
///
/// On macOS and Windows the OS keeps the contents after the process exits,
/// so the `clipboard` crate is used directly. Elsewhere the selection is
/// owned by whoever set it, so it is handed to a helper program that
/// outlives `passgen`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        use clipboard::{ClipboardContext, ClipboardProvider};

        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        Ok(())
    }
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        CommandClipboard::desktop().copy(text)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;

    fn capture_into(path: &std::path::Path) -> ClipboardHelper {
        ClipboardHelper::new("sh", &["-c", "cat > \"$1\"", "sh", path.to_str().unwrap()])
    }

    #[test]
    fn text_reaches_the_helper_and_survives_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection");
        let mut clipboard = CommandClipboard::new(vec![capture_into(&path)]);

        clipboard.copy("Xy7!pass").unwrap();

        // The helper has exited; what it stored is still there
        assert_eq!(fs::read_to_string(&path).unwrap(), "Xy7!pass");
    }

    #[test]
    fn missing_helpers_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection");
        let mut clipboard = CommandClipboard::new(vec![
            ClipboardHelper::new("passgen-no-such-helper", &[]),
            capture_into(&path),
        ]);

        clipboard.copy("abcDEF12").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abcDEF12");
    }

    #[test]
    fn failing_helper_is_not_success() {
        let mut clipboard = CommandClipboard::new(vec![ClipboardHelper::new(
            "sh",
            &["-c", "cat > /dev/null; exit 3"],
        )]);

        assert!(matches!(
            clipboard.copy("abcDEF12"),
            Err(ClipboardError::Write(_))
        ));
    }

    #[test]
    fn failing_helper_falls_through_to_the_next() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection");
        let mut clipboard = CommandClipboard::new(vec![
            ClipboardHelper::new("sh", &["-c", "exit 1"]),
            capture_into(&path),
        ]);

        clipboard.copy("qwERTY99").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "qwERTY99");
    }

    #[test]
    fn no_helper_installed_is_unavailable() {
        let mut clipboard = CommandClipboard::new(vec![
            ClipboardHelper::new("passgen-no-such-helper", &[]),
            ClipboardHelper::new("passgen-no-such-helper-either", &[]),
        ]);

        match clipboard.copy("abcDEF12") {
            Err(ClipboardError::Unavailable(reason)) => {
                assert!(reason.contains("passgen-no-such-helper-either"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn session_helpers() {
        let x11 = CommandClipboard::for_session(false);
        let programs: Vec<&str> = x11.helpers().iter().map(|h| h.program.as_str()).collect();
        assert_eq!(programs, vec!["xclip", "xsel"]);

        let wayland = CommandClipboard::for_session(true);
        assert_eq!(wayland.helpers()[0].program, "wl-copy");
        assert_eq!(wayland.helpers().len(), 3);
    }
}
