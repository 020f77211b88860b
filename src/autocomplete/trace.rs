//! Step-by-step debug trace returned alongside API results

use std::fmt::Display;

/// Collects human-readable lines when enabled, otherwise does nothing
#[derive(Debug, Default)]
pub struct DebugTrace {
    lines: Option<Vec<String>>,
}

impl DebugTrace {
    pub fn new(enabled: bool) -> Self {
        Self {
            lines: enabled.then(Vec::new),
        }
    }

    /// Record a labelled value
    pub fn record(&mut self, label: &str, value: impl Display) {
        if let Some(lines) = self.lines.as_mut() {
            lines.push(format!("{}: {}", label, value));
        }
    }

    /// Joined trace, `None` when disabled
    pub fn finish(self) -> Option<String> {
        self.lines.map(|lines| lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_trace_is_none() {
        let mut trace = DebugTrace::new(false);
        trace.record("query", "bu");
        assert_eq!(trace.finish(), None);
    }

    #[test]
    fn test_enabled_trace_joins_lines() {
        let mut trace = DebugTrace::new(true);
        trace.record("query", "\"bu\"");
        trace.record("pattern", "[bB][uU].*");
        assert_eq!(
            trace.finish().as_deref(),
            Some("query: \"bu\"\npattern: [bB][uU].*")
        );
    }
}
