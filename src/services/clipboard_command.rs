use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// External copy commands, tried in order.
const DEFAULT_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip.exe"],
];

/// Clipboard writer that pipes text into an external copy command.
#[derive(Debug, Clone)]
pub struct CommandClipboardWriter {
    commands: Vec<Vec<String>>,
}

impl Default for CommandClipboardWriter {
    fn default() -> Self {
        Self::with_commands(DEFAULT_COMMANDS)
    }
}

impl CommandClipboardWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom list of `program args...` candidates.
    pub fn with_commands(commands: &[&[&str]]) -> Self {
        let commands = commands
            .iter()
            .filter(|command| !command.is_empty())
            .map(|command| command.iter().map(|part| part.to_string()).collect())
            .collect();
        Self { commands }
    }

    fn run(command: &[String], text: &str) -> Result<(), String> {
        let (program, args) = command.split_first().ok_or_else(|| "empty command".to_string())?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("{}: {}", program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| format!("{}: {}", program, e))?;
        }

        let output = child.wait_with_output().map_err(|e| format!("{}: {}", program, e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(format!(
                "{}: {}",
                program,
                if stderr.is_empty() { output.status.to_string() } else { stderr }
            ));
        }
        Ok(())
    }
}

impl ClipboardWriter for CommandClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        let mut failures = Vec::new();
        for command in &self.commands {
            match Self::run(command, text) {
                Ok(()) => {
                    debug!(command = %command.join(" "), "copied with external command");
                    return Ok(());
                }
                Err(reason) => failures.push(reason),
            }
        }

        if failures.is_empty() {
            return Err(AppError::ClipboardError("no copy command configured".to_string()));
        }
        Err(AppError::ClipboardError(format!(
            "no copy command succeeded ({})",
            failures.join("; ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_programs_report_every_attempt() {
        let mut writer = CommandClipboardWriter::with_commands(&[
            &["promptcard-no-such-copy-a"],
            &["promptcard-no-such-copy-b", "--flag"],
        ]);
        let err = writer.write_text("hello").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("promptcard-no-such-copy-a"));
        assert!(message.contains("promptcard-no-such-copy-b"));
    }

    #[test]
    fn empty_command_list_fails() {
        let mut writer = CommandClipboardWriter::with_commands(&[&[]]);
        let err = writer.write_text("hello").unwrap_err();
        assert!(matches!(err, AppError::ClipboardError(_)));
    }

    #[cfg(unix)]
    #[test]
    fn succeeds_with_first_working_command() {
        let mut writer =
            CommandClipboardWriter::with_commands(&[&["promptcard-no-such-copy"], &["cat"]]);
        writer.write_text("hello").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failure() {
        let mut writer = CommandClipboardWriter::with_commands(&[&["false"]]);
        let err = writer.write_text("hello").unwrap_err();
        assert!(err.to_string().contains("false"));
    }
}
