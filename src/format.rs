//! Score Formatting
//!
//! Display helpers shared by the score cards.

/// One-decimal display form, e.g. `7.5`.
pub fn format_score(value: f64) -> String {
    format!("{:.1}", value)
}

/// CSS class for a score on the 0-10 scale. Thresholds match the dashboard
/// legend: 7 and above is good, 5 to 7 is a warning, below 5 is bad.
pub fn score_color(score: f64) -> &'static str {
    if score >= 7.0 {
        "score-good"
    } else if score >= 5.0 {
        "score-warn"
    } else {
        "score-bad"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_one_decimal() {
        assert_eq!(format_score(7.25), "7.2");
        assert_eq!(format_score(10.0), "10.0");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn test_score_color_thresholds() {
        assert_eq!(score_color(8.0), "score-good");
        assert_eq!(score_color(7.0), "score-good");
        assert_eq!(score_color(5.0), "score-warn");
        assert_eq!(score_color(4.9), "score-bad");
    }
}
