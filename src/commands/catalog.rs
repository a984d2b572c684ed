//! Reference table command handlers.

use super::CommandResult;
use hidusage::catalog::catalog_registry;
use serde::Serialize;

#[derive(Serialize)]
struct EntryJson<'a> {
    id: u16,
    name: &'a str,
    types: String,
    reports: String,
    access: &'static str,
    section: Option<&'a str>,
    unit: Option<&'static str>,
    battery_level: bool,
}

/// Print the catalog of a usage page
pub fn catalog(page: u16, all: bool, json: bool) -> CommandResult {
    let catalog = catalog_registry().catalog_for(page);
    let entries: Vec<_> = catalog
        .iter()
        .filter(|def| all || !def.is_reserved())
        .collect();

    if json {
        let rows: Vec<EntryJson> = entries
            .iter()
            .map(|def| EntryJson {
                id: def.id,
                name: &def.name,
                types: def.types.to_string(),
                reports: report_letters(def),
                access: access_token(def),
                section: def.section.as_deref(),
                unit: def.traits.inferred_unit.map(|u| u.symbol()),
                battery_level: def.traits.supports_battery_level_reporting,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "Usage page 0x{:02X}: {} ({} entries)",
        catalog.page(),
        catalog.name(),
        catalog.len()
    );
    if catalog.is_empty() {
        println!("  (no built-in table for this page)");
        return Ok(());
    }
    for def in entries {
        let unit = def
            .traits
            .inferred_unit
            .map(|u| format!(" [{u}]"))
            .unwrap_or_default();
        let sbml = if def.traits.supports_battery_level_reporting {
            " SBML"
        } else {
            ""
        };
        println!(
            "  0x{:02X}  {:<32} {:<10} {:<4} {:<4} {}{}{}",
            def.id,
            def.name,
            def.types.to_string(),
            report_letters(def),
            access_token(def),
            def.section.as_deref().unwrap_or(""),
            unit,
            sbml
        );
    }
    Ok(())
}

fn report_letters(def: &hidusage::catalog::UsageDefinition) -> String {
    use hidusage::catalog::ReportKinds;
    [
        (ReportKinds::INPUT, 'I'),
        (ReportKinds::OUTPUT, 'O'),
        (ReportKinds::FEATURE, 'F'),
    ]
    .iter()
    .filter(|(kind, _)| def.reports.contains(*kind))
    .map(|(_, c)| *c)
    .collect()
}

fn access_token(def: &hidusage::catalog::UsageDefinition) -> &'static str {
    match (def.readable(), def.writable()) {
        (true, true) => "R/W",
        (true, false) => "R/O",
        _ => "",
    }
}
