/// 2026 standard median monthly income by household size, in won.
pub(crate) const MEDIAN_INCOME_2026: &[(&str, u64)] = &[
    ("single", 2_564_238),
    ("two", 4_199_292),
    ("three", 5_359_036),
    ("four", 6_494_738),
];

/// Single-person baseline used when the household-size key has no entry.
pub(crate) const SINGLE_PERSON_MEDIAN: u64 = 2_564_238;

pub(crate) fn median_income(household_size: &str) -> u64 {
    MEDIAN_INCOME_2026
        .iter()
        .find(|(key, _)| *key == household_size)
        .map(|(_, amount)| *amount)
        .unwrap_or(SINGLE_PERSON_MEDIAN)
}

/// Income ceiling for a percent-of-median programme.
///
/// Always measured against the single-person baseline: the profile's household type
/// (`single`/`with_parents`) does not describe household size, so no larger bracket is
/// ever selected.
pub(crate) fn income_ceiling(threshold_percent: u32) -> f64 {
    median_income("single") as f64 * (f64::from(threshold_percent) / 100.0)
}

pub(crate) fn within_income_threshold(monthly_income: u64, threshold_percent: u32) -> bool {
    monthly_income as f64 <= income_ceiling(threshold_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_household_size_uses_single_baseline() {
        assert_eq!(median_income("with_parents"), SINGLE_PERSON_MEDIAN);
        assert_eq!(median_income("three"), 5_359_036);
    }

    #[test]
    fn ceiling_scales_single_baseline() {
        assert_eq!(income_ceiling(150).round(), 3_846_357.0);
        assert_eq!(income_ceiling(160).round(), 4_102_781.0);
        assert!(within_income_threshold(3_800_000, 150));
        assert!(within_income_threshold(3_846_357, 150));
        assert!(!within_income_threshold(3_846_358, 150));
    }
}
