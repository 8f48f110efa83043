//! Plan items paired with their matched wait records, ready to print.

use crate::matcher::{lookup_wait, AliasTable, WaitRecord, WaitStatus, WaitTable};
use crate::plan::PlanItem;

#[derive(Debug, Clone, Copy)]
pub struct OverlayRow<'a> {
    pub item: &'a PlanItem,
    pub record: Option<&'a WaitRecord>,
}

impl OverlayRow<'_> {
    pub fn status_text(&self) -> String {
        status_text(self.record)
    }
}

/// `"35 min"`, `"Operating"`, `"Down"`, `"Closed"`, or `"-"` without a record.
pub fn status_text(record: Option<&WaitRecord>) -> String {
    match record {
        None => "-".to_string(),
        Some(WaitRecord { status: WaitStatus::Operating, wait_mins: Some(mins), .. }) => {
            format!("{} min", mins)
        }
        Some(record) => record.status.to_string(),
    }
}

/// One row per plan item, in plan order.
pub fn build_overlay<'a>(
    items: &'a [PlanItem],
    table: &'a WaitTable,
    aliases: &AliasTable,
) -> Vec<OverlayRow<'a>> {
    items
        .iter()
        .map(|item| OverlayRow { item, record: lookup_wait(&item.name, table, aliases) })
        .collect()
}
