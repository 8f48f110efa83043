use anyhow::Result;
use chrono::NaiveTime;

use super::{time_column, Session};
use crate::plan::PlanItem;
use crate::reservations::{assess_plan, park_now, UrgencyThresholds};

pub fn render_reservations(
    items: &[PlanItem],
    now: NaiveTime,
    thresholds: &UrgencyThresholds,
) -> String {
    let statuses = assess_plan(items, now, thresholds);
    if statuses.is_empty() {
        return "No timed plan items.\n".to_string();
    }
    statuses
        .iter()
        .map(|(item, status)| {
            format!(
                "{} {:<12} {:<16} {}\n",
                time_column(&item.time_label),
                status.urgency.to_string(),
                status.countdown,
                item.name
            )
        })
        .collect()
}

pub fn show(session: &mut Session) -> Result<()> {
    let now = park_now(session.park);
    println!("{} local time {}", session.park.name, now.format("%H:%M"));
    print!(
        "{}",
        render_reservations(session.plan.items(), now, &session.config.reservations)
    );
    Ok(())
}
