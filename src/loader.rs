// 📂 CSV Loader - roster file → Roster
//
// Layout: header line (discarded), then `name,birth_date,salary,job_title`
// with dates as dd/mm/yyyy. No quoting: a comma always separates fields.

use crate::employee::{Employee, DATE_FORMAT};
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Number of fields every data row must carry
pub const FIELD_COUNT: usize = 4;

const HEADER_LINE: u64 = 1;

/// Load a roster from a CSV file on disk.
///
/// The file handle lives only for the duration of this call.
pub fn load_roster(csv_path: &Path) -> Result<Roster> {
    let file = File::open(csv_path).map_err(|source| RosterError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;

    let roster = read_roster(file)?;
    info!(path = %csv_path.display(), employees = roster.len(), "loaded roster");

    Ok(roster)
}

/// Parse a roster from any reader (file, stdin, in-memory buffer).
pub fn read_roster<R: Read>(reader: R) -> Result<Roster> {
    // Header handled by hand: the csv crate would skip leading blank
    // lines and promote the first data row to header
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut employees = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);

        // Physical line 1 is the header, whatever it holds
        if line == HEADER_LINE {
            continue;
        }
        // Whitespace-only lines trim down to empty fields
        if record.iter().all(str::is_empty) {
            continue;
        }

        let employee = parse_row(&record, line)?;
        debug!(line, name = %employee.name, "parsed employee");
        employees.push(employee);
    }

    Ok(Roster::new(employees))
}

fn parse_row(record: &StringRecord, line: u64) -> Result<Employee> {
    if record.len() != FIELD_COUNT {
        return Err(RosterError::Format {
            line,
            found: record.len(),
        });
    }

    let name = &record[0];
    if name.is_empty() {
        return Err(parse_error(line, "name", name));
    }

    let birth_date = NaiveDate::parse_from_str(&record[1], DATE_FORMAT)
        .map_err(|_| parse_error(line, "birth date", &record[1]))?;

    let salary =
        Decimal::from_str(&record[2]).map_err(|_| parse_error(line, "salary", &record[2]))?;
    if salary < Decimal::ZERO {
        warn!(line, name, %salary, "negative salary loaded as-is");
    }

    Ok(Employee::new(name, birth_date, &record[3], salary))
}

fn parse_error(line: u64, field: &'static str, value: &str) -> RosterError {
    RosterError::Parse {
        line,
        field,
        value: value.to_string(),
    }
}
