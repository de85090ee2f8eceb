//! Constants shared by the CLI layers

use std::time::Duration;

/// Progress reporting
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames, one arrow per step around a cycle
    pub const SPINNER_FRAMES: &[&str] = &["↻ ", "↻→", "↻↓", "↻←", "↻↑", "↺ "];
}

/// Output formatting
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Graph file discovery
pub mod input {
    /// Directory names never descended into
    pub const SKIP_DIRS: &[&str] = &["target", ".git", "node_modules"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert!(!progress::SPINNER_FRAMES.is_empty());
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "ascii");
    }

    #[test]
    fn test_skip_dirs() {
        assert!(input::SKIP_DIRS.contains(&"target"));
    }
}
