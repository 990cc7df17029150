//! Preview providers
//!
//! A [`PreviewProvider`] turns the highlighted item into text for the
//! preview pane. It sees the item itself, so structured items can show
//! fields that are not part of the display string. [`CommandPreview`] runs a
//! shell command per item, the way `fzf --preview` does.

use super::error::{Result, UiError};
use crate::scoring::ScoringResult;
use regex::Regex;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

/// Placeholder replaced by the quoted display string
pub const PLACEHOLDER: &str = "{}";

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
        .expect("ANSI escape pattern is valid")
});

/// Trait for preview providers
///
/// Implementations generate preview content for the item under the cursor.
pub trait PreviewProvider<T>: Send + Sync {
    /// Generate preview content
    ///
    /// # Arguments
    ///
    /// * `item` - The highlighted item
    /// * `display` - The item's display string
    /// * `result` - The item's score and match spans for the current query
    ///
    /// # Errors
    ///
    /// Returns an error if preview generation fails.
    fn preview(&self, item: &T, display: &str, result: &ScoringResult) -> Result<PreviewText>;
}

impl<T, F> PreviewProvider<T> for F
where
    F: Fn(&T, &str, &ScoringResult) -> Result<PreviewText> + Send + Sync,
{
    fn preview(&self, item: &T, display: &str, result: &ScoringResult) -> Result<PreviewText> {
        self(item, display, result)
    }
}

/// Preview text shown in the preview pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewText {
    /// The preview content
    pub content: String,
}

impl PreviewText {
    /// Create preview text
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Create preview text from terminal output, dropping escape sequences
    #[must_use]
    pub fn from_terminal_output(output: &str) -> Self {
        Self::plain(ANSI_ESCAPE.replace_all(output, ""))
    }

    /// Iterate over the lines of the preview
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}

/// Quote `text` for use as a single POSIX shell word
#[must_use]
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Preview by running a shell command template
///
/// Every `{}` in the template is replaced by the quoted display string; the
/// command runs through `sh -c` and its standard output becomes the preview.
#[derive(Debug, Clone)]
pub struct CommandPreview {
    template: String,
}

impl CommandPreview {
    /// Create a command preview from a template such as `cat {}`
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The command line that would be run for `display`
    #[must_use]
    pub fn command_line(&self, display: &str) -> String {
        self.template.replace(PLACEHOLDER, &shell_quote(display))
    }
}

impl<T> PreviewProvider<T> for CommandPreview {
    fn preview(&self, _item: &T, display: &str, _result: &ScoringResult) -> Result<PreviewText> {
        let command_line = self.command_line(display);
        tracing::debug!(command = %command_line, "running preview command");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command_line)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| UiError::Preview(format!("failed to run `{command_line}`: {e}")))?;

        if !output.status.success() && output.stdout.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(UiError::Preview(format!(
                "`{command_line}` exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(PreviewText::from_terminal_output(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}
