use regex::Regex;

use crate::errors::AppError;

/// Non-empty after trimming, so an all-whitespace name is rejected.
pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_number(phone: &str) -> Result<bool, AppError> {
    // Digits only, no leading "+"; the country code is stored as plain
    // digits the way the original records were written.
    let re = Regex::new(r"^\d+$")?;
    Ok(re.is_match(phone))
}

pub fn validate_mail(mail: &str) -> Result<bool, AppError> {
    // Mail is optional; when present it must look like an address and
    // stay under the usual length cap.
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
    Ok(mail.is_empty() || (re.is_match(mail) && mail.len() <= 254))
}
