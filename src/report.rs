// 🖨️ Report Printer - text and JSON rendering of a RosterReport
//
// Pure presentation: consumes already-computed results.
//
// Money is rounded half-up (2.725 → 2.73, not half-even), the same rule as
// the base-unit figures, and always keeps a leading zero (0.50, never .50).

use crate::employee::{Employee, DATE_FORMAT};
use crate::pipeline::RosterReport;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

const RULE: &str = "=====================================";

// ============================================================================
// FORMATTING
// ============================================================================

/// Money with thousands separators and exactly two decimals (half-up).
///
/// `1234567.891` → `1,234,567.89`
pub fn format_money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_employee(employee: &Employee) -> String {
    format!(
        "Name: {}\t| Birth date: {}\t| Title: {}\t| Salary: {}",
        employee.name,
        employee.birth_date.format(DATE_FORMAT),
        employee.job_title,
        format_money(employee.salary)
    )
}

// ============================================================================
// RENDERING
// ============================================================================

fn write_listing<W: Write>(out: &mut W, heading: &str, employees: &[Employee]) -> io::Result<()> {
    writeln!(out, "\n\n{}", heading)?;
    writeln!(out, "{}", RULE)?;
    for employee in employees {
        writeln!(out, "{}", format_employee(employee))?;
    }
    writeln!(out, "{}", RULE)
}

/// Plain-text report, one section per script step.
pub fn render_text<W: Write>(report: &RosterReport, out: &mut W) -> io::Result<()> {
    write_listing(out, "All employees:", &report.all)?;

    write_listing(
        out,
        &format!("All employees after removing {}:", report.removed.name),
        &report.after_removal,
    )?;

    write_listing(
        out,
        &format!("All employees after a raise by a factor of {}:", report.raise_factor),
        &report.after_raise,
    )?;

    writeln!(out, "\n\nEmployees grouped by job title:")?;
    writeln!(out, "{}", RULE)?;
    for section in &report.by_title {
        writeln!(out, "Title: {}", section.title)?;
        for employee in &section.employees {
            writeln!(out, "{}", format_employee(employee))?;
        }
        writeln!(out)?;
    }

    let months: Vec<String> = report.birthday_months.iter().map(u32::to_string).collect();
    write_listing(
        out,
        &format!("Employees with birthdays in months {}:", months.join(", ")),
        &report.birthdays,
    )?;

    writeln!(out, "\n\nOldest employee:")?;
    writeln!(
        out,
        "Name: {} | Age: {} years",
        report.oldest.employee.name, report.oldest.age
    )?;

    write_listing(out, "Employees in alphabetical order:", &report.alphabetical)?;

    writeln!(out, "\n\nTotal of salaries: {}", format_money(report.total_salaries))?;

    writeln!(
        out,
        "\n\nSalaries in base units of {}:",
        format_money(report.base_unit)
    )?;
    writeln!(out, "Name |\t Salary in base units")?;
    for (name, units) in &report.salaries_in_base_units {
        writeln!(out, "{} => {}", name, format_money(*units))?;
    }

    Ok(())
}

/// Same report as pretty-printed JSON. Decimals are emitted as strings.
pub fn render_json<W: Write>(report: &RosterReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
