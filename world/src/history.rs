//! Append-only log of submitted command lines.

/// Ordered record of normalized command strings.
#[derive(Clone, Debug, Default)]
pub(crate) struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, command: String) {
        self.entries.push(command);
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
