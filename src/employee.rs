// 👤 Employee Record - one row of the roster
//
// Flat record: name, birth date, job title, salary.
// Salary is an exact decimal so repeated raises never drift.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Date layout used by the CSV source and the printed report
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// ============================================================================
// EMPLOYEE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    /// Soft key: not guaranteed unique within a roster
    pub name: String,

    pub birth_date: NaiveDate,

    /// Grouping key
    pub job_title: String,

    /// Only field mutated after load (bulk salary adjustment)
    pub salary: Decimal,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        job_title: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Employee {
            name: name.into(),
            birth_date,
            job_title: job_title.into(),
            salary,
        }
    }

    /// Birth month, 1..=12
    pub fn birth_month(&self) -> u32 {
        self.birth_date.month()
    }

    /// Completed years of age on `date`
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let mut age = date.year() - self.birth_date.year();
        if (date.month(), date.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(birth: &str) -> Employee {
        Employee::new(
            "Ana",
            NaiveDate::parse_from_str(birth, DATE_FORMAT).unwrap(),
            "Analyst",
            Decimal::new(300000, 2),
        )
    }

    #[test]
    fn test_birth_month() {
        assert_eq!(create_test_employee("15/10/1985").birth_month(), 10);
        assert_eq!(create_test_employee("01/01/2000").birth_month(), 1);
    }

    #[test]
    fn test_age_counts_completed_years() {
        let employee = create_test_employee("15/10/1985");

        let before_birthday = NaiveDate::from_ymd_opt(2025, 10, 14).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();

        assert_eq!(employee.age_on(before_birthday), 39);
        assert_eq!(employee.age_on(on_birthday), 40);
    }

    #[test]
    fn test_age_for_leap_day_birth() {
        let employee = create_test_employee("29/02/2000");

        assert_eq!(employee.age_on(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()), 22);
        assert_eq!(employee.age_on(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()), 23);
    }
}
