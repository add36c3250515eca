//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion. Every line is also appended to a single
//! ordered transcript so tests can check sequencing across channels.

use super::{OutputMode, UserInterface};

/// Which channel a captured line was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Message,
    Success,
    Skipped,
    Warning,
    Error,
    Header,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    transcript: Vec<(Channel, String)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every captured line, in the order it was written.
    pub fn transcript(&self) -> &[(Channel, String)] {
        &self.transcript
    }

    fn lines(&self, channel: Channel) -> Vec<String> {
        self.transcript
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.lines(Channel::Message)
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> Vec<String> {
        self.lines(Channel::Success)
    }

    /// Get all captured skipped lines.
    pub fn skips(&self) -> Vec<String> {
        self.lines(Channel::Skipped)
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> Vec<String> {
        self.lines(Channel::Warning)
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<String> {
        self.lines(Channel::Error)
    }

    /// Get all captured headers.
    pub fn headers(&self) -> Vec<String> {
        self.lines(Channel::Header)
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.has(Channel::Message, msg)
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.has(Channel::Success, msg)
    }

    /// Check if a specific skipped line was shown.
    pub fn has_skipped(&self, msg: &str) -> bool {
        self.has(Channel::Skipped, msg)
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.has(Channel::Error, msg)
    }

    fn has(&self, channel: Channel, msg: &str) -> bool {
        self.transcript
            .iter()
            .any(|(c, m)| *c == channel && m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.transcript.push((Channel::Message, msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.transcript.push((Channel::Success, msg.to_string()));
    }

    fn skipped(&mut self, msg: &str) {
        self.transcript.push((Channel::Skipped, msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.transcript.push((Channel::Warning, msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.transcript.push((Channel::Error, msg.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.transcript.push((Channel::Header, title.to_string()));
    }
}
