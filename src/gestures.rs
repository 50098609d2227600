//! Gesture-sequence error counting
//!
//! A suturing attempt is recorded as an ordered list of gesture codes 1..=5.
//! Four independent rules each add one error:
//!
//! | Rule | Reason       |
//! |------|--------------|
//! | code 2 appears           | `S2 present` |
//! | code 3 never appears     | `S3 absent`  |
//! | code 5 never appears     | `S5 absent`  |
//! | code 4 appears < 2 times | `<2 S4`      |
//!
//! Rules are evaluated in table order, so `reasons` is deterministic.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Sentinel cell terminating a recorded sequence
pub const SEQUENCE_SENTINEL: &str = "-";

pub const MIN_GESTURE_CODE: u8 = 1;
pub const MAX_GESTURE_CODE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCount {
    /// Always in 0..=4
    pub count: usize,
    pub reasons: Vec<String>,
}

pub fn count_errors(sequence: &[u8]) -> ErrorCount {
    let occurrences = |code: u8| sequence.iter().filter(|&&g| g == code).count();

    let rules = [
        (occurrences(2) > 0, "S2 present"),
        (occurrences(3) == 0, "S3 absent"),
        (occurrences(5) == 0, "S5 absent"),
        (occurrences(4) < 2, "<2 S4"),
    ];

    let reasons: Vec<String> = rules
        .iter()
        .filter(|(violated, _)| *violated)
        .map(|(_, reason)| (*reason).to_string())
        .collect();

    ErrorCount {
        count: reasons.len(),
        reasons,
    }
}

fn parse_code(position: usize, token: &str) -> Result<u8> {
    let malformed = |reason: &str| AnalysisError::MalformedGesture {
        position,
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let value: f64 = token
        .parse()
        .map_err(|_| malformed("not a number"))?;
    if value.fract() != 0.0 {
        return Err(malformed("gesture codes are integers"));
    }
    if value < f64::from(MIN_GESTURE_CODE) || value > f64::from(MAX_GESTURE_CODE) {
        return Err(malformed("gesture code outside 1..=5"));
    }

    Ok(value as u8)
}

/// Read recorded cells until the sentinel or an empty cell
///
/// Spreadsheet exports store codes as floats, so "4.0" is accepted as 4.
pub fn parse_sequence<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>> {
    let mut sequence = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        let cell = token.as_ref().trim();
        if cell.is_empty() || cell == SEQUENCE_SENTINEL {
            break;
        }
        sequence.push(parse_code(position, cell)?);
    }
    Ok(sequence)
}

/// Error counts as an f64 sample for the statistical stages
pub fn error_counts_as_sample(counts: &[ErrorCount]) -> Vec<f64> {
    counts.iter().map(|c| c.count as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_attempt_has_no_errors() {
        let result = count_errors(&[1, 3, 4, 4, 4, 5]);
        assert_eq!(result.count, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_documented_three_error_attempt() {
        let result = count_errors(&[1, 2, 4, 5]);
        assert_eq!(result.count, 3);
        assert_eq!(result.reasons, vec!["S2 present", "S3 absent", "<2 S4"]);
    }

    #[test]
    fn test_every_rule_violated() {
        let result = count_errors(&[2, 1]);
        assert_eq!(result.count, 4);
        assert_eq!(
            result.reasons,
            vec!["S2 present", "S3 absent", "S5 absent", "<2 S4"]
        );
    }

    #[test]
    fn test_empty_sequence() {
        let result = count_errors(&[]);
        assert_eq!(result.count, 3);
        assert_eq!(result.reasons, vec!["S3 absent", "S5 absent", "<2 S4"]);
    }

    #[test]
    fn test_exactly_two_fours_is_enough() {
        let result = count_errors(&[3, 4, 4, 5]);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_parse_stops_at_sentinel() {
        let seq = parse_sequence(&["1", "3", "4.0", "4", "5", "-", "2", "2"]).unwrap();
        assert_eq!(seq, vec![1, 3, 4, 4, 5]);
        assert_eq!(count_errors(&seq).count, 0);
    }

    #[test]
    fn test_parse_stops_at_empty_cell() {
        let seq = parse_sequence(&["1", "2", "", "3"]).unwrap();
        assert_eq!(seq, vec![1, 2]);
    }

    #[test]
    fn test_parse_accepts_owned_strings() {
        let cells = vec![" 2 ".to_string(), "5".to_string()];
        assert_eq!(parse_sequence(&cells).unwrap(), vec![2, 5]);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_sequence(&["1", "x", "3"]).unwrap_err();
        match err {
            AnalysisError::MalformedGesture {
                position, token, ..
            } => {
                assert_eq!(position, 1);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_fractional() {
        for bad in ["0", "6", "-3", "2.5", "NaN"] {
            assert!(
                matches!(
                    parse_sequence(&[bad]),
                    Err(AnalysisError::MalformedGesture { position: 0, .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_counts_as_sample() {
        let counts = vec![count_errors(&[1, 3, 4, 4, 5]), count_errors(&[1, 2, 4, 5])];
        assert_eq!(error_counts_as_sample(&counts), vec![0.0, 3.0]);
    }
}
