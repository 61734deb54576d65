use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span, trace};

use crate::logging::redact_value;

use aif_model::PicklistCatalog;
use aif_model::record::RawRecord;
use aif_project::{ProjectionContext, project};
use aif_standards::{VerifySummary, builtin_catalog, load_pack_dir};

use crate::cli::{PicklistArgs, ProjectArgs, VerifyArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::ProjectResult;

pub fn run_project(args: &ProjectArgs) -> Result<ProjectResult> {
    let record_span = info_span!("project", record = %args.record.display());
    let _guard = record_span.enter();

    let contents = fs::read_to_string(&args.record)
        .with_context(|| format!("read record {}", args.record.display()))?;
    let record: RawRecord = serde_json::from_str(&contents)
        .with_context(|| format!("parse record {}", args.record.display()))?;
    trace!(
        last_name = redact_value(record.last_name.as_deref().unwrap_or_default()),
        "record parsed"
    );
    let catalog = load_catalog(args.pack_dir.as_deref())?;

    let ctx = ProjectionContext::new(&catalog);
    let document = project(&record, &ctx).context("project record")?;
    debug!(record_id = %document.meta.record_id, "record projected");

    let json = serde_json::to_string_pretty(&document).context("serialize document")?;
    if let Some(path) = &args.output {
        fs::write(path, format!("{json}\n"))
            .with_context(|| format!("write document {}", path.display()))?;
        info!(output = %path.display(), "canonical document written");
    } else {
        println!("{json}");
    }

    Ok(ProjectResult {
        record_id: document.meta.record_id.clone(),
        output_path: args.output.clone(),
        document,
    })
}

pub fn run_picklists(args: &PicklistArgs) -> Result<()> {
    let catalog = load_catalog(args.pack_dir.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Terms"),
        header_cell("Fallback"),
    ]);
    apply_table_style(&mut table);
    for picklist in catalog.iter() {
        let fallback = match picklist.fallback.fallback_label() {
            label if label.is_empty() => "(empty)".to_string(),
            label => label,
        };
        table.add_row(vec![
            picklist.name.clone(),
            picklist.len().to_string(),
            fallback,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_verify(args: &VerifyArgs) -> Result<VerifySummary> {
    let (_, summary) = load_pack_dir(&args.pack_dir)
        .with_context(|| format!("verify pack {}", args.pack_dir.display()))?;
    info!(
        files = summary.file_count,
        tables = summary.table_count,
        terms = summary.term_count,
        "pack verified"
    );
    Ok(summary)
}

fn load_catalog(pack_dir: Option<&Path>) -> Result<Cow<'static, PicklistCatalog>> {
    match pack_dir {
        Some(dir) => {
            let (catalog, summary) =
                load_pack_dir(dir).with_context(|| format!("load pack {}", dir.display()))?;
            debug!(
                tables = summary.table_count,
                terms = summary.term_count,
                "external pack loaded"
            );
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(builtin_catalog())),
    }
}
