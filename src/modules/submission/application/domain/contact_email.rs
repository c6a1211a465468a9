use crate::modules::reseller::application::domain::entities::is_valid_email;

const PLACEHOLDER_DOMAIN: &str = "placeholder.pedireito";
const PHONE_SUFFIX_DIGITS: usize = 8;

/// The supplied email when it is well formed, otherwise a unique placeholder
/// built from the phone's last digits and the submission time.
pub fn derive_contact_email(supplied: Option<&str>, phone: &str, now_millis: i64) -> String {
    if let Some(email) = supplied.map(str::trim).filter(|e| is_valid_email(e)) {
        return email.to_string();
    }

    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let tag = if digits.is_empty() {
        "revendedor"
    } else {
        &digits[digits.len().saturating_sub(PHONE_SUFFIX_DIGITS)..]
    };

    format!("revendedor-{tag}-{now_millis}@{PLACEHOLDER_DOMAIN}")
}
