//! Device command handlers: build the usage tree and query it.

use super::{print_device, CommandResult, Context};
use hidusage::catalog::{page, UsageTypes};
use hidusage::collection::{UsageCollection, UsageNode};
use hidusage::error::UsageError;
use hidusage::query::{
    LiveQueryEngine, QueryOutcome, QueryReport, AUDIBLE_ALARM_CONTROL, DEVICE_CHEMISTRY,
    POWER_TEST,
};
use hidusage::value::{AudibleAlarmControl, UsageValue};
use hidusage_source::CapabilitySource;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct NodeJson<'a> {
    page: u16,
    usage: u16,
    name: &'a str,
    collection: u16,
    report_id: u8,
    report_kind: &'static str,
    types: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a UsageValue>,
}

impl<'a> NodeJson<'a> {
    fn new(node: &'a UsageNode) -> Self {
        Self {
            page: node.usage_page(),
            usage: node.usage_id(),
            name: node.name(),
            collection: node.collection_id(),
            report_id: node.report_id(),
            report_kind: node.report_kind().as_str(),
            types: node.types().to_string(),
            unit: node.definition().traits.inferred_unit.map(|u| u.symbol()),
            value: node.value(),
        }
    }
}

#[derive(Serialize)]
struct EntryJson<'a> {
    collection: NodeJson<'a>,
    button_group: bool,
    children: Vec<NodeJson<'a>>,
}

fn entries_json<'a>(
    entries: impl Iterator<Item = &'a hidusage::collection::CollectionEntry>,
) -> Vec<EntryJson<'a>> {
    entries
        .map(|e| EntryJson {
            collection: NodeJson::new(&e.collection),
            button_group: e.collection.is_button_group(),
            children: e.children.iter().map(NodeJson::new).collect(),
        })
        .collect()
}

fn collection_header(node: &UsageNode) -> String {
    format!(
        "{} (0x{:02X}:0x{:02X}, {}, {}){}",
        node.name(),
        node.usage_page(),
        node.collection_id(),
        node.types(),
        node.report_kind(),
        if node.is_button_group() { " buttons" } else { "" }
    )
}

fn leaf_line(node: &UsageNode) -> String {
    let unit = node
        .definition()
        .traits
        .inferred_unit
        .map(|u| u.symbol())
        .unwrap_or("");
    match node.value() {
        Some(value) => format!(
            "0x{:02X}:0x{:02X}  {:<28} = {}{}",
            node.usage_page(),
            node.usage_id(),
            node.name(),
            value,
            if unit.is_empty() || value.as_i64().is_none() {
                String::new()
            } else {
                format!(" {unit}")
            }
        ),
        None => format!(
            "0x{:02X}:0x{:02X}  {:<28} report 0x{:02X} {}",
            node.usage_page(),
            node.usage_id(),
            node.name(),
            node.report_id(),
            node.types()
        ),
    }
}

fn print_report(report: &QueryReport) {
    if let Some(e) = &report.open_error {
        eprintln!("Could not open device: {e} ({} values skipped)", report.skipped);
    }
    for failure in &report.failures {
        eprintln!(
            "  failed: {} (0x{:02X}:0x{:02X} in 0x{:02X}): {}",
            failure.name,
            failure.usage_page,
            failure.usage_id,
            failure.collection_id,
            failure.error
        );
    }
}

fn print_outcome(outcome: &QueryOutcome, json: bool) -> CommandResult {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries_json(outcome.snapshot.iter()))?
        );
    } else {
        for entry in outcome.snapshot.iter() {
            println!("{}", collection_header(&entry.collection));
            for child in &entry.children {
                println!("  {}", leaf_line(child));
            }
        }
    }
    print_report(&outcome.report);
    Ok(())
}

/// Build and print the usage collection tree
pub fn tree(ctx: &Context) -> CommandResult {
    let source = ctx.open_source()?;
    let collection = UsageCollection::build(source.capabilities());
    print_tree(source.as_ref(), &collection, ctx.json)
}

fn print_tree(source: &dyn CapabilitySource, collection: &UsageCollection, json: bool) -> CommandResult {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries_json(collection.iter()))?
        );
        return Ok(());
    }
    print_device(source);
    println!(
        "{} collections, {} usages",
        collection.len(),
        collection.leaf_count()
    );
    for entry in collection.iter() {
        println!("{}", collection_header(&entry.collection));
        for child in &entry.children {
            println!("  {}", leaf_line(child));
        }
    }
    Ok(())
}

/// Read current values
pub fn values(ctx: &Context, all: bool, unlinked: bool) -> CommandResult {
    let source = ctx.open_source()?;
    let collection = UsageCollection::build(source.capabilities());
    let engine = LiveQueryEngine::new(&collection, source.as_ref());
    let outcome = if all {
        engine.get_feature_values(UsageTypes::COLLECTIONS, UsageTypes::all(), unlinked)
    } else {
        engine.refresh_dynamic_values()
    };
    info!(
        "Read {} values ({} failures)",
        outcome.snapshot.leaves().count(),
        outcome.report.failures.len()
    );
    print_outcome(&outcome, ctx.json)
}

/// Look up a single usage
pub fn lookup(ctx: &Context, usage: u16, collection_id: u16, no_read: bool) -> CommandResult {
    let source = ctx.open_source()?;
    let collection = UsageCollection::build(source.capabilities());
    let engine = LiveQueryEngine::new(&collection, source.as_ref());
    match engine.lookup_value(usage, collection_id, !no_read)? {
        Some(node) if ctx.json => {
            println!("{}", serde_json::to_string_pretty(&NodeJson::new(&node))?)
        }
        Some(node) => println!("{}", leaf_line(&node)),
        None => println!("Usage 0x{usage:02X} not found"),
    }
    Ok(())
}

/// Write a feature value
pub fn set(ctx: &Context, usage: u16, value: i32, collection_id: u16) -> CommandResult {
    let source = ctx.open_source()?;
    let collection = UsageCollection::build(source.capabilities());
    let engine = LiveQueryEngine::new(&collection, source.as_ref());
    engine.set_feature_value(usage, collection_id, value)?;
    println!("Usage 0x{usage:02X} set to {value}");
    Ok(())
}

/// Print the capability snapshot of the selected source
pub fn snapshot(ctx: &Context) -> CommandResult {
    let source = ctx.open_source()?;
    println!("{}", source.capabilities().to_json()?);
    Ok(())
}

#[derive(Serialize)]
struct DemoJson<'a> {
    tree: Vec<EntryJson<'a>>,
    values: Vec<EntryJson<'a>>,
    lookups: Vec<NodeJson<'a>>,
    muted: Option<NodeJson<'a>>,
}

/// Valued lookups of the enumerated and string usages, then the alarm
/// after muting it
fn demo_steps<S: CapabilitySource + ?Sized>(
    engine: &LiveQueryEngine<'_, S>,
) -> Result<(Vec<UsageNode>, Option<UsageNode>), UsageError> {
    let mut lookups = Vec::new();
    for (usage_page, usage) in [
        (page::POWER_DEVICE, AUDIBLE_ALARM_CONTROL),
        (page::POWER_DEVICE, POWER_TEST),
        (page::BATTERY_SYSTEM, DEVICE_CHEMISTRY),
    ] {
        let node = engine
            .collection()
            .leaves()
            .map(|(_, leaf)| leaf)
            .find(|leaf| leaf.usage_page() == usage_page && leaf.usage_id() == usage);
        if let Some(node) = node {
            if let Some(valued) = engine.lookup_value(node.usage_id(), node.collection_id(), true)? {
                lookups.push(valued);
            }
        }
    }

    engine.set_feature_value(AUDIBLE_ALARM_CONTROL, 0, AudibleAlarmControl::Muted.raw())?;
    let muted = engine.lookup_value(AUDIBLE_ALARM_CONTROL, 0, true)?;
    Ok((lookups, muted))
}

fn demo_json(
    collection: &UsageCollection,
    refreshed: &QueryOutcome,
    lookups: &[UsageNode],
    muted: Option<&UsageNode>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DemoJson {
        tree: entries_json(collection.iter()),
        values: entries_json(refreshed.snapshot.iter()),
        lookups: lookups.iter().map(NodeJson::new).collect(),
        muted: muted.map(NodeJson::new),
    })
}

/// Walk through the demo UPS
pub fn demo(ctx: &Context) -> CommandResult {
    let source = hidusage::demo::demo_ups();
    let collection = UsageCollection::build(source.capabilities());
    let engine = LiveQueryEngine::new(&collection, &source);
    let refreshed = engine.refresh_dynamic_values();
    let (lookups, muted) = demo_steps(&engine)?;

    if ctx.json {
        println!("{}", demo_json(&collection, &refreshed, &lookups, muted.as_ref())?);
        print_report(&refreshed.report);
        return Ok(());
    }

    println!("=== Usage tree ===");
    print_tree(&source, &collection, false)?;

    println!();
    println!("=== Dynamic values ===");
    print_outcome(&refreshed, false)?;

    println!();
    println!("=== Lookups ===");
    for node in &lookups {
        println!("  {}", leaf_line(node));
    }

    println!();
    println!("=== Mute the alarm ===");
    if let Some(node) = &muted {
        println!("  {}", leaf_line(node));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hidusage::demo::demo_ups;

    #[test]
    fn demo_json_is_one_document() {
        let source = demo_ups();
        let collection = UsageCollection::build(source.capabilities());
        let engine = LiveQueryEngine::new(&collection, &source);
        let refreshed = engine.refresh_dynamic_values();
        let (lookups, muted) = demo_steps(&engine).unwrap();

        let text = demo_json(&collection, &refreshed, &lookups, muted.as_ref()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["tree"].as_array().unwrap().len(), collection.len());
        assert_eq!(doc["lookups"].as_array().unwrap().len(), 3);
        assert_eq!(doc["lookups"][2]["value"]["kind"], "chemistry");
        assert_eq!(doc["muted"]["value"]["kind"], "alarm_control");
    }
}
