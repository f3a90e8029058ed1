use regex::Regex;
use std::sync::LazyLock;

use crate::model::markup::ASPECT_RATIO_PROPERTY;

// `.5`, `2`, `1.5` or `16/9`. A zero denominator never matches.
static VALID_RATIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((\.\d+)|(\d+(\.\d+)?)|(\d+/([1-9]\d*)))$").expect("valid ratio pattern")
});

/// Padding percentage for `aspect_ratio`, formatted with two decimals.
/// Ties round away from zero, so `32` gives `3.13%`.
///
/// Returns `None` for invalid input or a zero ratio.
pub fn aspect_ratio_percentage(aspect_ratio: &str) -> Option<String> {
    if !VALID_RATIO.is_match(aspect_ratio) {
        return None;
    }

    let value = match aspect_ratio.split_once('/') {
        Some((width, height)) => width.parse::<f64>().ok()? / height.parse::<f64>().ok()?,
        None => aspect_ratio.parse::<f64>().ok()?,
    };
    if value == 0.0 || !value.is_finite() {
        return None;
    }

    let percentage = ((100.0 / value) * 100.0).round() / 100.0;
    Some(format!("{:.2}%", percentage))
}

/// Inline style declaring the aspect-ratio custom property, if the ratio is valid.
pub fn aspect_ratio_style(aspect_ratio: &str) -> Option<String> {
    aspect_ratio_percentage(aspect_ratio)
        .map(|percentage| format!("{}:{};", ASPECT_RATIO_PROPERTY, percentage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_and_numbers() {
        assert_eq!(aspect_ratio_percentage("16/9").as_deref(), Some("56.25%"));
        assert_eq!(aspect_ratio_percentage("4/3").as_deref(), Some("75.00%"));
        assert_eq!(aspect_ratio_percentage("2").as_deref(), Some("50.00%"));
        assert_eq!(aspect_ratio_percentage(".5").as_deref(), Some("200.00%"));
        assert_eq!(aspect_ratio_percentage("9/16").as_deref(), Some("177.78%"));
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(aspect_ratio_percentage("32").as_deref(), Some("3.13%"));
        assert_eq!(aspect_ratio_percentage("160").as_deref(), Some("0.63%"));
        assert_eq!(aspect_ratio_percentage("8").as_deref(), Some("12.50%"));
    }

    #[test]
    fn rejects_invalid_and_zero_ratios() {
        assert_eq!(aspect_ratio_percentage(""), None);
        assert_eq!(aspect_ratio_percentage("16:9"), None);
        assert_eq!(aspect_ratio_percentage("16/0"), None);
        assert_eq!(aspect_ratio_percentage("0"), None);
        assert_eq!(aspect_ratio_percentage("0/4"), None);
        assert_eq!(aspect_ratio_percentage("wide"), None);
    }

    #[test]
    fn style_uses_the_custom_property() {
        assert_eq!(
            aspect_ratio_style("4/3").as_deref(),
            Some("--byeb--aspect-ratio:75.00%;")
        );
        assert_eq!(aspect_ratio_style("x"), None);
    }
}
