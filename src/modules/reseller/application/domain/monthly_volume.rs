/// Numeric value of the free-text "pares por mês" answer.
///
/// Every ASCII digit is kept in order and the result parsed (`"1.500 pares"`
/// becomes `1500`). Answers without digits, or too large for an `i64`, have no
/// numeric value and sort after every numeric one.
pub fn extract_monthly_volume(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok()
}
