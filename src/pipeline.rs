// 🔁 Report Script - the fixed sequence of roster operations
//
// Runs every step against the roster and captures each result in a
// `RosterReport`. Printing happens afterwards, from the captured values.
//
//   1. all employees         6. oldest employee + age
//   2. remove one by name    7. alphabetical order
//   3. salary raise          8. total of salaries
//   4. group by title        9. salaries in base units
//   5. birthday months

use crate::config::ReportConfig;
use crate::employee::Employee;
use crate::error::Result;
use crate::roster::Roster;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

// ============================================================================
// REPORT VALUE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReport {
    pub all: Vec<Employee>,
    pub removed: Employee,
    pub after_removal: Vec<Employee>,
    pub raise_factor: Decimal,
    pub after_raise: Vec<Employee>,
    pub by_title: Vec<TitleSection>,
    pub birthday_months: Vec<u32>,
    pub birthdays: Vec<Employee>,
    pub oldest: OldestEmployee,
    pub alphabetical: Vec<Employee>,
    pub total_salaries: Decimal,
    pub base_unit: Decimal,
    pub salaries_in_base_units: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleSection {
    pub title: String,
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OldestEmployee {
    pub employee: Employee,
    pub age: i32,
}

// ============================================================================
// SCRIPT
// ============================================================================

/// Run the report script over `roster`, computing ages as of `today`.
///
/// Any failing step aborts the script; nothing partial is returned.
pub fn run_script(mut roster: Roster, config: &ReportConfig, today: NaiveDate) -> Result<RosterReport> {
    config.validate()?;
    info!(employees = roster.len(), "running report script");

    let all = roster.employees().to_vec();

    let removed = roster.remove_by_name(&config.remove_name)?;
    let after_removal = roster.employees().to_vec();

    roster.adjust_salaries(config.raise_factor)?;
    let after_raise = roster.employees().to_vec();

    let by_title = roster
        .group_by_title()
        .into_iter()
        .map(|group| TitleSection {
            title: group.title.to_string(),
            employees: group.employees.into_iter().cloned().collect(),
        })
        .collect();

    let months = config.birthday_month_set();
    let birthdays = roster
        .filter_by_birth_month(&months)
        .into_iter()
        .cloned()
        .collect();

    let oldest = roster.find_oldest()?;
    let oldest = OldestEmployee {
        age: oldest.age_on(today),
        employee: oldest.clone(),
    };

    roster.sort_by_name();
    let alphabetical = roster.employees().to_vec();

    let total_salaries = roster.total_salaries()?;
    let salaries_in_base_units = roster.salaries_in_base_units(config.base_unit)?;

    info!(%total_salaries, "report script finished");

    Ok(RosterReport {
        all,
        removed,
        after_removal,
        raise_factor: config.raise_factor,
        after_raise,
        by_title,
        birthday_months: months.into_iter().collect(),
        birthdays,
        oldest,
        alphabetical,
        total_salaries,
        base_unit: config.base_unit,
        salaries_in_base_units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::loader::read_roster;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::str::FromStr;

    const SEED: &str = "\
nome,data_nascimento,salario,funcao
Maria,18/10/2000,2009.44,Operador
João,12/05/1990,2284.38,Operador
Caio,02/05/1961,9836.14,Coordenador
Miguel,14/10/1988,19119.88,Diretor
Alice,05/01/1995,2234.68,Recepcionista
Heitor,19/11/1999,1582.72,Operador
Arthur,31/03/1993,4071.84,Contador
Laura,08/07/1994,3017.45,Gerente
Heloísa,24/05/2003,1606.85,Eletricista
Helena,02/09/1996,2799.93,Gerente
";

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn seed() -> Roster {
        read_roster(Cursor::new(SEED)).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn names(employees: &[Employee]) -> Vec<&str> {
        employees.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_script_on_seed_roster() {
        let report = run_script(seed(), &ReportConfig::default(), today()).unwrap();

        assert_eq!(report.all.len(), 10);
        assert_eq!(report.removed.name, "João");
        assert_eq!(report.after_removal.len(), 9);
        assert!(report.after_removal.iter().all(|e| e.name != "João"));

        // 2009.44 * 1.10
        assert_eq!(report.after_raise[0].salary, dec("2210.384"));

        let titles: Vec<&str> = report.by_title.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Operador", "Coordenador", "Diretor", "Recepcionista", "Contador", "Gerente", "Eletricista"]
        );
        assert_eq!(names(&report.by_title[0].employees), vec!["Maria", "Heitor"]);

        assert_eq!(report.birthday_months, vec![10, 12]);
        assert_eq!(names(&report.birthdays), vec!["Maria", "Miguel"]);

        assert_eq!(report.oldest.employee.name, "Caio");
        assert_eq!(report.oldest.age, 65);

        assert_eq!(
            names(&report.alphabetical),
            vec!["Alice", "Arthur", "Caio", "Heitor", "Helena", "Heloísa", "Laura", "Maria", "Miguel"]
        );
    }

    #[test]
    fn test_total_and_base_units_after_raise() {
        let report = run_script(seed(), &ReportConfig::default(), today()).unwrap();

        // Sum of the nine remaining salaries (46278.93) times 1.10
        assert_eq!(report.total_salaries, dec("50906.823"));
        assert_eq!(report.base_unit, dec("1212.00"));
        assert_eq!(report.salaries_in_base_units.len(), 9);
        // 19119.88 * 1.10 / 1212 = 17.3528...
        assert_eq!(report.salaries_in_base_units["Miguel"], dec("17.35"));
        // 1582.72 * 1.10 / 1212 = 1.43646...
        assert_eq!(report.salaries_in_base_units["Heitor"], dec("1.44"));
    }

    #[test]
    fn test_missing_removal_target_aborts() {
        let config = ReportConfig {
            remove_name: "Nobody".to_string(),
            ..ReportConfig::default()
        };

        let err = run_script(seed(), &config, today()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_roster_emptied_by_removal_aborts_at_oldest() {
        let roster = read_roster(Cursor::new("h\nJoão,12/05/1990,2284.38,Operador\n")).unwrap();

        let err = run_script(roster, &ReportConfig::default(), today()).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_running() {
        let config = ReportConfig {
            base_unit: Decimal::ZERO,
            ..ReportConfig::default()
        };

        let err = run_script(seed(), &config, today()).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }
}
