use crm_console::controller::{ListController, run_bulk_delete};
use crm_console::model::{FormMode, Lease, parse_assignments};
use crm_console::resource::{Resource, ResourceApi};

use super::*;

pub(super) fn handle_lease_command(console: &Console, command: LeaseCommands) -> Result<()> {
    match command {
        LeaseCommands::Records(command) => handle_records_command::<Lease>(console, command),
        LeaseCommands::Return { id } => {
            console.require_login()?;
            console.client()?.mark_lease_returned(id)?;
            println!("Lease #{} marked as returned", id);
            Ok(())
        }
    }
}

pub(super) fn handle_records_command<R: Resource>(
    console: &Console,
    command: RecordCommands,
) -> Result<()> {
    console.require_login()?;
    let client = console.client()?;

    match command {
        RecordCommands::List(args) => {
            let mut list =
                ListController::<R>::new(args.page_size.unwrap_or(console.config.page_size));
            list.goto_page(&client, args.page)?;
            if let Some(term) = args.search.as_deref() {
                list.search(term);
            }
            if args.json {
                let mut out = serde_json::json!({
                    "page": list.page(),
                    "page_size": list.page_size(),
                    "total_count": list.total_count(),
                    "total_pages": list.total_pages(),
                });
                out[R::KIND.collection()] =
                    serde_json::to_value(list.filtered()).context("serialize records")?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&out).context("serialize list json")?
                );
            } else if list.filtered().is_empty() {
                if list.records().is_empty() {
                    println!("No {} found", R::KIND.collection());
                } else {
                    println!(
                        "No {} on this page match {:?}",
                        R::KIND.collection(),
                        list.search_term()
                    );
                }
            } else {
                let rows: Vec<Vec<String>> = list.filtered().iter().map(|r| r.row()).collect();
                print_table(R::columns(), &rows);
                println!(
                    "page {}/{} · total {} · size {}",
                    list.display_page(),
                    list.total_pages(),
                    list.total_count(),
                    list.page_size()
                );
            }
        }
        RecordCommands::Add { set, json } => {
            let form = parse_assignments(&set, R::form_fields())?;
            let payload = R::payload_from_form(&form, FormMode::Create)?;
            let created = <RemoteClient as ResourceApi<R>>::create(&client, &payload)?;
            print_record(&created, json, "Created")?;
        }
        RecordCommands::Update { id, set, json } => {
            let form = parse_assignments(&set, R::form_fields())?;
            let payload = R::payload_from_form(&form, FormMode::Update)?;
            let updated = <RemoteClient as ResourceApi<R>>::update(&client, id, &payload)?;
            print_record(&updated, json, "Updated")?;
        }
        RecordCommands::Delete { id, yes } => {
            let mut list = ListController::<R>::new(console.config.page_size);
            let request = list.request_delete(id);
            if !yes && !confirm(request.prompt())? {
                println!("Cancelled");
                return Ok(());
            }
            list.delete(&client, request.confirm())?;
            println!("Deleted {} #{}", R::KIND.singular(), id);
        }
        RecordCommands::BulkDelete { ids, yes, json } => {
            let prompt = format!("Delete {} {}?", ids.len(), R::KIND.collection());
            if !yes && !confirm(&prompt)? {
                println!("Cancelled");
                return Ok(());
            }
            let report = run_bulk_delete::<R>(&client, &ids);
            if json {
                let out = serde_json::json!({
                    "succeeded": report.succeeded,
                    "failed": report.failed,
                    "skipped": report.skipped,
                    "errors": report
                        .errors
                        .iter()
                        .map(|(id, e)| serde_json::json!({"id": id, "error": e.to_string()}))
                        .collect::<Vec<_>>(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&out).context("serialize bulk delete json")?
                );
            } else {
                for id in &report.succeeded {
                    println!("deleted {}", id);
                }
                for (id, err) in &report.errors {
                    println!("failed  {}: {}", id, err);
                }
                for id in &report.skipped {
                    println!("skipped {}", id);
                }
            }
            if !report.is_complete_success() {
                anyhow::bail!("bulk delete incomplete: {}", report.summary());
            }
        }
    }
    Ok(())
}

fn print_record<R: Resource>(record: &R, json: bool, verb: &str) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(record).context("serialize record json")?
        );
    } else {
        println!("{} {} #{}", verb, R::KIND.singular(), record.id());
        for (col, val) in R::columns().iter().zip(record.row()) {
            println!("  {}: {}", col, val);
        }
    }
    Ok(())
}

fn print_table(columns: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect();
        println!("{}", padded.join("  ").trim_end());
    };
    line(columns.to_vec());
    for row in rows {
        line(row.iter().map(String::as_str).collect());
    }
}
