// 📋 Roster Operations - the transformation core
//
// Ordered, mutable sequence of employees plus the fixed set of
// list transformations run by the report script:
//   remove, raise, group, filter, oldest, sort, total, base units.
//
// Everything is exact decimal arithmetic. Nothing here prints.

use crate::employee::Employee;
use crate::error::{Result, RosterError};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Fraction digits kept when expressing salaries in base units
pub const BASE_UNIT_SCALE: u32 = 2;

// ============================================================================
// ROSTER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Self {
        Roster { employees }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    // ========================================================================
    // IN-PLACE OPERATIONS
    // ========================================================================

    /// Remove the first employee whose name matches exactly (case-sensitive).
    ///
    /// The roster is left untouched when nobody matches.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Employee> {
        let position = self
            .employees
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;

        let removed = self.employees.remove(position);
        debug!(name, position, remaining = self.employees.len(), "removed employee");
        Ok(removed)
    }

    /// Multiply every salary by `factor` (1.10 = 10% raise).
    ///
    /// No rounding is applied. On overflow no salary is changed.
    pub fn adjust_salaries(&mut self, factor: Decimal) -> Result<()> {
        let adjusted = self
            .employees
            .iter()
            .map(|e| {
                e.salary
                    .checked_mul(factor)
                    .ok_or(RosterError::Arithmetic("adjusting salaries"))
            })
            .collect::<Result<Vec<Decimal>>>()?;

        for (employee, salary) in self.employees.iter_mut().zip(adjusted) {
            employee.salary = salary;
        }

        debug!(%factor, employees = self.employees.len(), "adjusted salaries");
        Ok(())
    }

    /// Stable sort by name, code point order (no locale collation).
    pub fn sort_by_name(&mut self) {
        self.employees.sort_by(|a, b| a.name.cmp(&b.name));
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Group by job title, keeping roster order within each group.
    /// Groups appear in order of each title's first occurrence.
    pub fn group_by_title(&self) -> Vec<TitleGroup<'_>> {
        let mut groups: Vec<TitleGroup<'_>> = Vec::new();

        for employee in &self.employees {
            match groups.iter_mut().find(|g| g.title == employee.job_title) {
                Some(group) => group.employees.push(employee),
                None => groups.push(TitleGroup {
                    title: &employee.job_title,
                    employees: vec![employee],
                }),
            }
        }

        groups
    }

    /// Employees born in any of `months` (1..=12), in roster order.
    pub fn filter_by_birth_month(&self, months: &BTreeSet<u32>) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| months.contains(&e.birth_month()))
            .collect()
    }

    /// Earliest birth date; the first one in roster order wins a tie.
    pub fn find_oldest(&self) -> Result<&Employee> {
        // min_by_key keeps the first of equal minima
        self.employees
            .iter()
            .min_by_key(|e| e.birth_date)
            .ok_or_else(|| RosterError::NotFound("oldest employee of an empty roster".to_string()))
    }

    /// Exact sum of all salaries, zero for an empty roster.
    pub fn total_salaries(&self) -> Result<Decimal> {
        self.employees.iter().try_fold(Decimal::ZERO, |total, e| {
            total
                .checked_add(e.salary)
                .ok_or(RosterError::Arithmetic("summing salaries"))
        })
    }

    /// Each salary divided by `base`, rounded half-up to 2 fraction digits.
    ///
    /// Keyed by name: when two employees share a name the later one wins.
    pub fn salaries_in_base_units(&self, base: Decimal) -> Result<BTreeMap<String, Decimal>> {
        let mut units = BTreeMap::new();

        for employee in &self.employees {
            let ratio = div_round_half_up(employee.salary, base, BASE_UNIT_SCALE)
                .ok_or(RosterError::Arithmetic("dividing by the base unit"))?;

            if units.insert(employee.name.clone(), ratio).is_some() {
                debug!(name = %employee.name, "duplicate name overwrote earlier base-unit entry");
            }
        }

        Ok(units)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

/// `dividend / divisor` rounded half-up (away from zero) to `scale` digits.
///
/// Rounds once, from the exact remainder. A plain `checked_div` already
/// rounds to 28 significant digits, which can push a value across the
/// midpoint before the second rounding. `None` on zero divisor or overflow.
fn div_round_half_up(dividend: Decimal, divisor: Decimal, scale: u32) -> Option<Decimal> {
    if divisor.is_zero() {
        return None;
    }
    let negative = !dividend.is_zero() && dividend.is_sign_negative() != divisor.is_sign_negative();

    let shift = Decimal::from_i128_with_scale(10i128.checked_pow(scale)?, 0);
    let numerator = dividend.abs().checked_mul(shift)?;
    let divisor = divisor.abs();

    // Integer quotient, corrected if the division rounded across an integer
    let mut quotient = numerator.checked_div(divisor)?.trunc();
    let mut remainder = numerator.checked_sub(quotient.checked_mul(divisor)?)?;
    if remainder < Decimal::ZERO {
        quotient -= Decimal::ONE;
        remainder += divisor;
    } else if remainder >= divisor {
        quotient += Decimal::ONE;
        remainder -= divisor;
    }

    if remainder.checked_mul(Decimal::TWO)? >= divisor {
        quotient += Decimal::ONE;
    }

    let mut result = quotient.checked_div(shift)?;
    result.rescale(scale);
    Some(if negative { -result } else { result })
}

// ============================================================================
// TITLE GROUP
// ============================================================================

/// Employees sharing one job title, borrowed from the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleGroup<'a> {
    pub title: &'a str,
    pub employees: Vec<&'a Employee>,
}
