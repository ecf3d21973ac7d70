//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter count as a bar scaled against the most frequent letter
#[must_use]
pub fn frequency_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 {
        return "░".repeat(width);
    }
    create_progress_bar(count as f64, max_count as f64, width)
}

/// Percentage share of `count` within `total`, rendered to one decimal place
#[must_use]
pub fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", (count as f64 / total as f64) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn frequency_bar_scales_to_max_count() {
        assert_eq!(frequency_bar(5, 5, 10), "██████████");
        assert_eq!(frequency_bar(1, 5, 10), "██░░░░░░░░");
    }

    #[test]
    fn frequency_bar_handles_zero_max() {
        assert_eq!(frequency_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn percentage_formatting() {
        assert_eq!(percentage(7, 9), "77.8%");
        assert_eq!(percentage(0, 9), "0.0%");
        assert_eq!(percentage(3, 0), "0.0%");
    }
}
