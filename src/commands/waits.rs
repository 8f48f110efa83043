use anyhow::Result;
use chrono::Local;

use super::Session;
use crate::live::WaitSnapshot;
use crate::matcher::{normalize_key, WaitTable};
use crate::overlay::status_text;

/// Attractions in name order, optionally narrowed by a name fragment.
pub fn render_waits(table: &WaitTable, filter: Option<&str>) -> String {
    let needle = filter.map(normalize_key).unwrap_or_default();
    let lines: String = table
        .iter()
        .filter(|(key, _)| key.contains(needle.as_str()))
        .map(|(_, record)| format!("{:>9}  {}\n", status_text(Some(record)), record.name))
        .collect();
    if lines.is_empty() {
        "No matching attractions.\n".to_string()
    } else {
        lines
    }
}

fn print_snapshot(session: &Session, snapshot: &WaitSnapshot, filter: Option<&str>) {
    println!(
        "{} - {} ({})",
        session.park.name,
        Local::now().format("%H:%M:%S"),
        snapshot.origin
    );
    print!("{}", render_waits(&snapshot.table, filter));
}

pub async fn show(session: &mut Session, filter: Option<&str>, watch: bool) -> Result<()> {
    let park = session.park;
    let snapshot = session.live().snapshot(park).await;
    print_snapshot(session, &snapshot, filter);
    if !watch {
        return Ok(());
    }

    let interval = session.config.live.refresh_interval();
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => break,
        }
        let snapshot = session.live().refresh(park).await;
        println!();
        print_snapshot(session, &snapshot, filter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{WaitRecord, WaitStatus};
    use pretty_assertions::assert_eq;

    fn table() -> WaitTable {
        WaitTable::from_records(vec![
            WaitRecord::new("Space Mountain", WaitStatus::Operating, Some(45)),
            WaitRecord::new("Haunted Mansion", WaitStatus::Down, None),
            WaitRecord::new("Big Thunder Mountain Railroad", WaitStatus::Operating, Some(120)),
        ])
    }

    #[test]
    fn lists_all_in_name_order() {
        assert_eq!(
            render_waits(&table(), None),
            "  120 min  Big Thunder Mountain Railroad\n     Down  Haunted Mansion\n   45 min  Space Mountain\n"
        );
    }

    #[test]
    fn filter_uses_normalised_names() {
        assert_eq!(
            render_waits(&table(), Some("MOUNTAIN!")),
            "  120 min  Big Thunder Mountain Railroad\n   45 min  Space Mountain\n"
        );
        assert_eq!(render_waits(&table(), Some("tiki")), "No matching attractions.\n");
    }
}
