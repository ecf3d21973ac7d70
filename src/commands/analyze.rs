//! Text analysis command

use super::{CommandError, require_text};
use crate::analysis::{FrequencyTable, TextStatistics, compute_statistics, frequency_analysis};

/// Combined statistics and letter frequencies for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub statistics: TextStatistics,
    pub frequency: FrequencyTable,
}

/// Analyze `text`, producing character statistics and a letter frequency table
///
/// # Errors
///
/// Returns an error if `text` is empty or whitespace-only.
pub fn analyze_text(text: &str) -> Result<AnalysisReport, CommandError> {
    let text = require_text(text)?;

    Ok(AnalysisReport {
        statistics: compute_statistics(text),
        frequency: frequency_analysis(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_statistics_and_frequencies_together() {
        let report = analyze_text("AAB").unwrap();

        assert_eq!(report.statistics.total_chars, 3);
        assert_eq!(report.statistics.uppercase_chars, 3);
        assert_eq!(report.frequency.get(&'a'), Some(&2));
        assert_eq!(report.frequency.get(&'b'), Some(&1));
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(analyze_text(""), Err(CommandError::EmptyInput));
        assert_eq!(analyze_text(" \n "), Err(CommandError::EmptyInput));
    }

    #[test]
    fn frequency_sum_matches_alphabetic_count() {
        let report = analyze_text("Attack at dawn, 0400!").unwrap();
        let total: usize = report.frequency.values().sum();
        assert_eq!(total, report.statistics.alphabetic_chars);
    }
}
