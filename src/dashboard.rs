// Log view state management module

use std::sync::Arc;

use crate::constants::MAX_LOG_LINES;
use crate::operations::ReportSink;

/// Sentinel value to indicate "scroll to bottom" - renderer will calculate actual position
pub const SCROLL_TO_BOTTOM: usize = usize::MAX;

/// Log view state: status text plus a bounded, scrollable list of report lines
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub status_text: Arc<str>,
    pub output_lines: Vec<String>,
    pub output_scroll: usize,
    /// Auto-scroll enabled flag - when true, new lines automatically scroll to bottom
    pub auto_scroll_enabled: bool,
    max_lines: usize,
}

impl DashboardState {
    /// Create a new log view keeping the compiled-in number of lines
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }

    /// Create a new log view keeping at most `max_lines` lines
    pub fn with_capacity(max_lines: usize) -> Self {
        Self {
            status_text: Arc::from("Ready"),
            output_lines: Vec::new(),
            output_scroll: 0,
            auto_scroll_enabled: true,
            max_lines: max_lines.max(1),
        }
    }

    /// Scroll output up - disables auto-scroll when user manually scrolls
    pub fn scroll_output_up(&mut self, amount: usize) {
        self.auto_scroll_enabled = false;
        if self.output_scroll != SCROLL_TO_BOTTOM {
            self.output_scroll = self.output_scroll.saturating_sub(amount);
        }
    }

    /// Scroll output down; reaching the last line re-enables auto-scroll
    pub fn scroll_output_down(&mut self, amount: usize) {
        if self.output_scroll == SCROLL_TO_BOTTOM {
            return;
        }
        // Conservative estimate - actual max_scroll is clamped during render
        let estimated_max = self.output_lines.len().saturating_sub(1);
        self.output_scroll = (self.output_scroll + amount).min(estimated_max);
        if self.output_scroll == estimated_max {
            self.auto_scroll_enabled = true;
            self.output_scroll = SCROLL_TO_BOTTOM;
        }
    }

    /// Scroll to bottom of output (called by renderer with correct visible_height)
    pub fn scroll_to_bottom(&mut self, visible_height: usize) {
        self.output_scroll = self.output_lines.len().saturating_sub(visible_height);
    }

    /// Add a line to output, enforcing size limit
    /// If auto-scroll is enabled, marks scroll position for "scroll to bottom" during render
    pub fn add_output_line(&mut self, line: String) {
        self.output_lines.push(line);

        // Enforce size limit by removing oldest lines
        if self.output_lines.len() > self.max_lines {
            let remove_count = self.output_lines.len() - self.max_lines;
            self.output_lines.drain(0..remove_count);

            if self.output_scroll != SCROLL_TO_BOTTOM {
                self.output_scroll = self.output_scroll.saturating_sub(remove_count);
            }
        }

        if self.auto_scroll_enabled {
            self.output_scroll = SCROLL_TO_BOTTOM;
        }
    }

    /// Drop every line and follow new output again
    pub fn clear(&mut self) {
        self.output_lines.clear();
        self.output_scroll = 0;
        self.auto_scroll_enabled = true;
    }

    /// Set status text
    pub fn set_status_text(&mut self, text: &str) {
        self.status_text = Arc::from(text);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for DashboardState {
    fn report(&mut self, line: String) {
        self.add_output_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_lines_are_dropped() {
        let mut log = DashboardState::with_capacity(3);
        for i in 0..5 {
            log.report(format!("line {}", i));
        }
        assert_eq!(log.output_lines, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(log.output_scroll, SCROLL_TO_BOTTOM);
    }

    #[test]
    fn test_manual_scroll_stops_following() {
        let mut log = DashboardState::new();
        for i in 0..20 {
            log.add_output_line(format!("line {}", i));
        }
        log.scroll_to_bottom(5);
        assert_eq!(log.output_scroll, 15);

        log.scroll_output_up(3);
        assert!(!log.auto_scroll_enabled);
        assert_eq!(log.output_scroll, 12);

        log.add_output_line("new".to_string());
        assert_eq!(log.output_scroll, 12);

        log.scroll_output_down(100);
        assert!(log.auto_scroll_enabled);
        assert_eq!(log.output_scroll, SCROLL_TO_BOTTOM);
    }

    #[test]
    fn test_clear() {
        let mut log = DashboardState::new();
        log.add_output_line("x".to_string());
        log.scroll_output_up(1);
        log.clear();
        assert!(log.output_lines.is_empty());
        assert!(log.auto_scroll_enabled);
    }
}
