use chrono::{DateTime, Duration, Utc};
use validator::ValidationError;

/// Yield credit for one investment, in minor units, rounded half-up.
/// `percentage` is a percent figure (5.0 means 5%).
pub fn yield_amount(invested_minor: i64, percentage: f64) -> i64 {
    (invested_minor as f64 * percentage / 100.0).round() as i64
}

/// Maturity date for an investment running `months` months. Months are
/// approximated as 30 days; payout periods are driven by scheduled payments,
/// not by this date.
pub fn end_date_after_months(start: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    start + Duration::days(30 * months as i64)
}

/// Render minor units as a decimal string for user-facing messages.
pub fn format_minor(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// IBAN-shaped check: two letters, two digits, 11..30 alphanumerics. Full
/// mod-97 validation is the bank's job, not ours.
pub fn validate_iban(iban: &str) -> Result<(), ValidationError> {
    let normalized: String = iban.chars().filter(|c| !c.is_whitespace()).collect();

    if normalized.len() < 15 || normalized.len() > 34 {
        return Err(ValidationError::new("iban_length"));
    }

    let bytes = normalized.as_bytes();
    let country_ok = bytes[0].is_ascii_uppercase() && bytes[1].is_ascii_uppercase();
    let check_ok = bytes[2].is_ascii_digit() && bytes[3].is_ascii_digit();
    let body_ok = normalized[4..].chars().all(|c| c.is_ascii_alphanumeric());

    if country_ok && check_ok && body_ok {
        Ok(())
    } else {
        Err(ValidationError::new("iban_format"))
    }
}
