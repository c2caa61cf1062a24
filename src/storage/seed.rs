//! Synthetic employee generator used to populate a fresh store.
//!
//! Names are drawn from fixed Turkish name lists; dates, phone numbers,
//! departments and positions are uniform over their ranges. Emails follow
//! `first.last@sourtimes.org` with Turkish letters folded to ASCII, and a
//! numeric suffix is appended when a combination repeats so that every
//! seeded email is unique.

use crate::domain::{Department, Employee, EmployeeData, EmployeeId, Position};
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use strum::IntoEnumIterator;

pub const FIRST_NAMES: [&str; 10] = [
    "Ahmet", "Mehmet", "Ayşe", "Fatma", "Ali", "Zeynep", "Can", "Ece", "Deniz", "Berk",
];

pub const LAST_NAMES: [&str; 10] = [
    "Yılmaz", "Kaya", "Demir", "Çelik", "Şahin", "Yıldız", "Özdemir", "Arslan", "Doğan", "Aydın",
];

const EMAIL_DOMAIN: &str = "sourtimes.org";

/// Generates `count` employees with ids `1..=count`.
///
/// The same RNG state always yields the same employees.
pub fn generate_employees<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Employee> {
    let employment = date_range((2020, 1, 1), (2024, 1, 1));
    let birth = date_range((1980, 1, 1), (2000, 1, 1));
    let departments: Vec<Department> = Department::iter().collect();
    let positions: Vec<Position> = Position::iter().collect();

    let mut email_uses: HashMap<String, usize> = HashMap::new();
    let mut employees = Vec::with_capacity(count);

    for n in 1..=count {
        let first_name = pick(&FIRST_NAMES, rng);
        let last_name = pick(&LAST_NAMES, rng);

        let local = format!("{}.{}", ascii_fold(first_name), ascii_fold(last_name));
        let uses = email_uses.entry(local.clone()).or_insert(0);
        *uses += 1;
        let email = if *uses == 1 {
            format!("{local}@{EMAIL_DOMAIN}")
        } else {
            format!("{local}{uses}@{EMAIL_DOMAIN}")
        };

        let data = EmployeeData {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_employment: random_date(employment, rng),
            date_of_birth: random_date(birth, rng),
            phone: random_phone(rng),
            email,
            department: *departments.choose(rng).unwrap_or(&Department::Tech),
            position: *positions.choose(rng).unwrap_or(&Position::Junior),
        };

        let id = u32::try_from(n).unwrap_or(u32::MAX);
        employees.push(Employee::from_data(EmployeeId(id), data));
    }

    tracing::debug!(count = employees.len(), "seeded employees");
    employees
}

fn pick<'a, R: Rng + ?Sized>(names: &[&'a str], rng: &mut R) -> &'a str {
    names.choose(rng).copied().unwrap_or("")
}

fn date_range(start: (i32, u32, u32), end: (i32, u32, u32)) -> (NaiveDate, i64) {
    let start_date = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap_or_default();
    let end_date = NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap_or_default();
    (start_date, (end_date - start_date).num_days().max(1))
}

fn random_date<R: Rng + ?Sized>((start, span_days): (NaiveDate, i64), rng: &mut R) -> NaiveDate {
    start + Duration::days(rng.gen_range(0..span_days))
}

fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+90 {:03} {:03} {:02} {:02}",
        rng.gen_range(0..1000),
        rng.gen_range(0..1000),
        rng.gen_range(0..100),
        rng.gen_range(0..100)
    )
}

/// Lowercases and maps Turkish letters onto their ASCII base letters.
#[must_use]
pub fn ascii_fold(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'ç' | 'Ç' => 'c',
            'ğ' | 'Ğ' => 'g',
            'ı' | 'I' | 'İ' => 'i',
            'ö' | 'Ö' => 'o',
            'ş' | 'Ş' => 's',
            'ü' | 'Ü' => 'u',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
