use anyhow::{anyhow, Result};
use log::info;
use std::io;
use std::path::Path;

use super::{time_column, Session};
use crate::import::{import_file, import_reader, ImportFormat};
use crate::overlay::{build_overlay, OverlayRow};
use crate::plan::PlanItem;

pub fn render_plan(items: &[PlanItem]) -> String {
    if items.is_empty() {
        return "Your plan is empty. Add something with 'parkplan add 9am Space Mountain'.\n"
            .to_string();
    }
    items
        .iter()
        .map(|item| format!("{}  {} {}\n", item.short_id(), time_column(&item.time_label), item.name))
        .collect()
}

pub fn render_overlay(rows: &[OverlayRow<'_>]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}  {} {:<9} {}\n",
                row.item.short_id(),
                time_column(&row.item.time_label),
                row.status_text(),
                row.item.name
            )
        })
        .collect()
}

pub async fn list(session: &mut Session, live: bool) -> Result<()> {
    if !live || session.plan.is_empty() {
        print!("{}", render_plan(session.plan.items()));
        return Ok(());
    }

    let park = session.park;
    let snapshot = session.live().snapshot(park).await;
    let rows = build_overlay(session.plan.items(), &snapshot.table, session.aliases());
    println!("{} - wait times: {}", park.name, snapshot.origin);
    print!("{}", render_overlay(&rows));
    Ok(())
}

pub fn add(session: &mut Session, entry: &str, time: Option<&str>) -> Result<()> {
    let item = session.plan.add_entry(entry, time)?;
    println!("Added {}  {} {}", item.short_id(), time_column(&item.time_label), item.name);
    session.save_plan()
}

pub fn edit(session: &mut Session, id: &str, name: Option<&str>, time: Option<&str>) -> Result<()> {
    if name.is_none() && time.is_none() {
        return Err(anyhow!("Nothing to change; pass --name and/or --time"));
    }
    let item = session.plan.edit(id, name, time)?;
    println!("Updated {}  {} {}", item.short_id(), time_column(&item.time_label), item.name);
    session.save_plan()
}

pub fn remove(session: &mut Session, id: &str) -> Result<()> {
    let item = session.plan.remove(id)?;
    println!("Removed '{}'", item.name);
    session.save_plan()
}

pub fn clear(session: &mut Session) -> Result<()> {
    let count = session.plan.clear();
    println!("Removed {} items", count);
    session.save_plan()
}

pub fn import(session: &mut Session, file: Option<&Path>, replace: bool) -> Result<()> {
    let report = match file {
        Some(path) => import_file(path)?,
        None => import_reader(io::stdin().lock(), ImportFormat::Text)?,
    };
    if report.items.is_empty() {
        return Err(anyhow!("No plan items found in the import"));
    }

    if replace {
        session.plan.clear();
    }
    let added = report.items.len();
    session.plan.extend(report.items);
    session.save_plan()?;

    info!("Import added {} items, skipped {} lines", added, report.skipped);
    println!("Imported {} items", added);
    if report.skipped > 0 {
        println!("Skipped {} lines with no activity name", report.skipped);
    }
    Ok(())
}
