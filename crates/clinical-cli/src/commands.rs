use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use clinical_model::{ClinicalData, ClinicalEntityType};
use clinical_report::{
    ErrorReport, TableSort, aggregate_errors, merge_records, sort_rows, table_columns,
};

use crate::cli::{ErrorsArgs, TableArgs};
use crate::summary::{print_entity_list, print_entity_table, print_error_report};

/// Run the `errors` command. Returns the total number of error entries
/// printed, which drives the process exit code.
pub fn run_errors(args: &ErrorsArgs) -> Result<usize> {
    let data = load_snapshot(&args.snapshot)?;
    let entities: Vec<ClinicalEntityType> = match &args.entity {
        Some(name) => vec![name.parse()?],
        None => ClinicalEntityType::ALL.to_vec(),
    };

    let mut total_entries = 0;
    let mut printed = 0usize;
    for entity in entities {
        let report: ErrorReport = aggregate_errors(&data.clinical_errors, entity);
        if report.is_empty() {
            continue;
        }
        total_entries += report.total_entries;
        printed += 1;
        print_error_report(entity, &report);
    }
    if printed == 0 {
        println!("No validation errors.");
    }
    info!(total_entries, entity_reports = printed, "error report complete");
    Ok(total_entries)
}

/// Run the `table` command.
pub fn run_table(args: &TableArgs) -> Result<()> {
    let data = load_snapshot(&args.snapshot)?;
    let entity: ClinicalEntityType = args.entity.parse()?;
    let Some(block) = data.entity(entity) else {
        bail!("snapshot has no {entity} entity block");
    };

    let sort = args
        .sort
        .as_deref()
        .map(|expression| {
            TableSort::parse(expression)
                .with_context(|| format!("unknown completion column sort: {expression}"))
        })
        .transpose()?;

    let mut rows = merge_records(&block.records, block.completion_stats.as_deref(), entity);
    sort_rows(&mut rows, &data.clinical_errors, sort.as_ref());
    let columns = table_columns(&block.entity_fields, &block.records, entity);
    info!(
        entity = entity.name(),
        rows = rows.len(),
        columns = columns.len(),
        "rendering entity table"
    );
    print_entity_table(entity, &columns, &rows, &data.clinical_errors, block.total_docs);
    Ok(())
}

/// Run the `entities` command.
pub fn run_entities() {
    print_entity_list();
}

fn load_snapshot(path: &Path) -> Result<ClinicalData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let data: ClinicalData = serde_json::from_str(&raw)
        .with_context(|| format!("snapshot {} is not a clinicalData result", path.display()))?;
    info!(
        entities = data.clinical_entities.len(),
        error_groups = data.clinical_errors.len(),
        "loaded snapshot"
    );
    Ok(data)
}
