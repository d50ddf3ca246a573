//! Formatting helpers for presenting scores.

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

/// Picker label, e.g. `"1 - 平安银行"`.
pub fn company_label(security_code: i64, short_name: &str) -> String {
    format!("{security_code} - {short_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to(33.33333, 2), 33.33);
        assert_eq!(round_to(66.666, 2), 66.67);
        assert_eq!(format_score(10.0), "10.00");
        assert_eq!(format_score(2.345678), "2.35");
    }

    #[test]
    fn labels_join_code_and_name() {
        assert_eq!(company_label(600000, "浦发银行"), "600000 - 浦发银行");
    }
}
