use crate::models::LogEntry;

/// Append-only record of notable game events.
///
/// Lives for the whole process, so it keeps history across resets.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event and mirror it to the diagnostic log
    pub fn append(&mut self, action: &str, details: &str) -> &LogEntry {
        log::info!("{}: {}", action, details);
        self.entries.push(LogEntry::new(action, details));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries recorded under the given action name
    pub fn with_action<'a>(&'a self, action: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries.iter().filter(move |e| e.action == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = ActivityLog::new();
        log.append("Game Initialization", "Starting");
        log.append("Drag Start", "Started dragging component: Gold Layer");
        log.append("Game Initialization", "Done");

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[1].action, "Drag Start");
        assert_eq!(log.with_action("Game Initialization").count(), 2);
    }

    #[test]
    fn test_format_line() {
        let mut log = ActivityLog::new();
        let line = log.append("Hint Requested", "User requested a hint").format_line();
        assert!(line.starts_with('['));
        assert!(line.ends_with("] Hint Requested: User requested a hint"));
    }
}
