//! Form-boundary validation and phone formatting.
//!
//! [`EmployeeDraft::validate`] checks every field of a raw draft and either
//! produces a typed [`EmployeeData`] or the full set of field errors.
//! [`format_phone`] re-assembles typed digits into the `+90 DDD DDD DD DD`
//! template as the user types.

use super::employee::{Department, EmployeeData, EmployeeDraft, Field, Position};
use super::error::FieldErrorKind;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Country-code prefix every phone number starts with.
pub const PHONE_PREFIX: &str = "+90 ";

/// Minimum age, by calendar-year subtraction.
pub const MINIMUM_AGE: i32 = 18;

/// Number of significant digits kept after the country code.
const PHONE_DIGITS: usize = 10;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+90 [0-9]{3} [0-9]{3} [0-9]{2} [0-9]{2}$").expect("phone pattern compiles"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Field errors keyed by field, in form order.
pub type FieldErrors = BTreeMap<Field, FieldErrorKind>;

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Age by year subtraction only; month and day are ignored, so someone born
/// in December counts a full year older from January 1st.
#[must_use]
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - date_of_birth.year()
}

/// Formats raw phone input into the `+90 DDD DDD DD DD` template.
///
/// All non-digits are dropped. The first two digits are taken to be the
/// country code; the remaining digits are grouped 3-3-2-2 and anything past
/// ten significant digits is discarded. Empty input, or input holding only
/// the country code, collapses to the bare prefix.
///
/// # Examples
///
/// ```
/// use roster::domain::validation::format_phone;
///
/// assert_eq!(format_phone("905551234567"), "+90 555 123 45 67");
/// assert_eq!(format_phone("+90 5551"), "+90 555 1");
/// assert_eq!(format_phone(""), "+90 ");
/// ```
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();

    let mut formatted = String::from(PHONE_PREFIX);
    if digits.len() <= 2 {
        return formatted;
    }

    let significant = &digits[2..digits.len().min(2 + PHONE_DIGITS)];
    for (group_index, group) in [3usize, 3, 2, 2]
        .iter()
        .scan(0usize, |offset, &width| {
            let start = *offset;
            *offset += width;
            Some((start, start + width))
        })
        .enumerate()
    {
        let (start, end) = group;
        if start >= significant.len() {
            break;
        }
        if group_index > 0 {
            formatted.push(' ');
        }
        formatted.extend(&significant[start..end.min(significant.len())]);
    }

    formatted
}

fn check_date(value: &str, errors: &mut FieldErrors, field: Field) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        errors.insert(field, FieldErrorKind::Required);
        return None;
    }
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, FieldErrorKind::InvalidDate);
            None
        }
    }
}

fn check_choice<T: FromStr>(value: &str, errors: &mut FieldErrors, field: Field) -> Option<T> {
    if value.trim().is_empty() {
        errors.insert(field, FieldErrorKind::Required);
        return None;
    }
    T::from_str(value.trim()).map_or_else(
        |_| {
            errors.insert(field, FieldErrorKind::InvalidOption);
            None
        },
        Some,
    )
}

fn check_text(value: &str, errors: &mut FieldErrors, field: Field) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, FieldErrorKind::Required);
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl EmployeeDraft {
    /// Validates every field of the draft.
    ///
    /// All rules run so that every offending field gets an inline message in
    /// a single pass.
    ///
    /// # Errors
    ///
    /// Returns the map of rejected fields when any rule fails.
    pub fn validate(&self, today: NaiveDate) -> Result<EmployeeData, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = check_text(&self.first_name, &mut errors, Field::FirstName);
        let last_name = check_text(&self.last_name, &mut errors, Field::LastName);
        let date_of_employment = check_date(&self.date_of_employment, &mut errors, Field::DateOfEmployment);

        let date_of_birth = check_date(&self.date_of_birth, &mut errors, Field::DateOfBirth).filter(|dob| {
            if age_in_years(*dob, today) < MINIMUM_AGE {
                errors.insert(Field::DateOfBirth, FieldErrorKind::Underage);
                false
            } else {
                true
            }
        });

        let phone = if self.phone.trim().is_empty() || self.phone == PHONE_PREFIX {
            errors.insert(Field::Phone, FieldErrorKind::Required);
            None
        } else if is_valid_phone(&self.phone) {
            Some(self.phone.clone())
        } else {
            errors.insert(Field::Phone, FieldErrorKind::InvalidPhone);
            None
        };

        let email = if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldErrorKind::Required);
            None
        } else if is_valid_email(&self.email) {
            Some(self.email.clone())
        } else {
            errors.insert(Field::Email, FieldErrorKind::InvalidEmail);
            None
        };

        let department = check_choice::<Department>(&self.department, &mut errors, Field::Department);
        let position = check_choice::<Position>(&self.position, &mut errors, Field::Position);

        match (
            first_name,
            last_name,
            date_of_employment,
            date_of_birth,
            phone,
            email,
            department,
            position,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(date_of_employment),
                Some(date_of_birth),
                Some(phone),
                Some(email),
                Some(department),
                Some(position),
            ) if errors.is_empty() => Ok(EmployeeData {
                first_name,
                last_name,
                date_of_employment,
                date_of_birth,
                phone,
                email,
                department,
                position,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Deniz".to_string(),
            last_name: "Arslan".to_string(),
            date_of_employment: "2022-02-01".to_string(),
            date_of_birth: "1995-07-09".to_string(),
            phone: "+90 532 111 22 33".to_string(),
            email: "deniz.arslan@sourtimes.org".to_string(),
            department: "Analytics".to_string(),
            position: "Medior".to_string(),
        }
    }

    #[test]
    fn test_format_phone_full_number() {
        assert_eq!(format_phone("905551234567"), "+90 555 123 45 67");
    }

    #[test]
    fn test_format_phone_progressive() {
        assert_eq!(format_phone("+90 "), "+90 ");
        assert_eq!(format_phone("90"), "+90 ");
        assert_eq!(format_phone("9055"), "+90 55");
        assert_eq!(format_phone("90555"), "+90 555");
        assert_eq!(format_phone("905551"), "+90 555 1");
        assert_eq!(format_phone("90555123"), "+90 555 123");
        assert_eq!(format_phone("905551234"), "+90 555 123 4");
        assert_eq!(format_phone("90555123456"), "+90 555 123 45 6");
    }

    #[test]
    fn test_format_phone_caps_at_ten_digits() {
        assert_eq!(format_phone("+90 555 123 45 6789"), "+90 555 123 45 67");
    }

    #[test]
    fn test_format_phone_output_is_stable() {
        let once = format_phone("905321112233");
        assert_eq!(format_phone(&once), once);
        assert!(is_valid_phone(&once));
    }

    #[test]
    fn test_valid_draft_passes() {
        let data = valid_draft().validate(today()).unwrap();
        assert_eq!(data.department, Department::Analytics);
        assert_eq!(data.position, Position::Medior);
        assert_eq!(data.date_of_birth, NaiveDate::from_ymd_opt(1995, 7, 9).unwrap());
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = EmployeeDraft::default().validate(today()).unwrap_err();
        assert_eq!(errors.len(), 8);
        assert!(errors.values().all(|kind| *kind == FieldErrorKind::Required));
    }

    #[test]
    fn test_whitespace_names_are_required() {
        let mut draft = valid_draft();
        draft.first_name = "   ".to_string();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(&Field::FirstName), Some(&FieldErrorKind::Required));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_age_seventeen_by_year_rejected() {
        let mut draft = valid_draft();
        draft.date_of_birth = "2009-01-01".to_string();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(&Field::DateOfBirth), Some(&FieldErrorKind::Underage));
    }

    #[test]
    fn test_age_eighteen_by_year_accepted_even_before_birthday() {
        let mut draft = valid_draft();
        // Exact age on 2026-10-14 would be 17; year subtraction says 18.
        draft.date_of_birth = "2008-12-31".to_string();
        assert!(draft.validate(today()).is_ok());
    }

    #[test]
    fn test_bad_phone_and_email_formats() {
        let mut draft = valid_draft();
        draft.phone = "+90 5321112233".to_string();
        draft.email = "deniz@nowhere".to_string();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(&Field::Phone), Some(&FieldErrorKind::InvalidPhone));
        assert_eq!(errors.get(&Field::Email), Some(&FieldErrorKind::InvalidEmail));
    }

    #[test]
    fn test_bare_phone_prefix_is_required() {
        let mut draft = valid_draft();
        draft.phone = PHONE_PREFIX.to_string();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(&Field::Phone), Some(&FieldErrorKind::Required));
    }

    #[test]
    fn test_unknown_department_rejected() {
        let mut draft = valid_draft();
        draft.department = "Marketing".to_string();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(&Field::Department), Some(&FieldErrorKind::InvalidOption));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut draft = valid_draft();
        draft.date_of_employment = "01/02/2022".to_string();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(&Field::DateOfEmployment), Some(&FieldErrorKind::InvalidDate));
    }
}
