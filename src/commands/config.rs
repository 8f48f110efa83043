use anyhow::Result;

use super::Session;
use crate::cli::ConfigActions;
use crate::config::Config;
use crate::parks::PARKS;

pub fn render_config(config: &Config) -> String {
    let plan_file = config
        .storage
        .plan_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.parkplan/plan.json (default)".to_string());
    format!(
        "\nPark:\n  park: {}\n\nLive data:\n  api_base_url: {}\n  refresh_seconds: {}\n  timeout_seconds: {}\n\nStorage:\n  plan_file: {}\n\nReservations:\n  imminent_minutes: {}\n  soon_minutes: {}\n  grace_minutes: {}\n",
        config.park.park,
        config.live.api_base_url,
        config.live.refresh_seconds,
        config.live.timeout_seconds,
        plan_file,
        config.reservations.imminent_minutes,
        config.reservations.soon_minutes,
        config.reservations.grace_minutes,
    )
}

pub fn handle(session: &mut Session, action: ConfigActions) -> Result<()> {
    match action {
        ConfigActions::Show => {
            print!("{}", render_config(&session.config));
        }
        ConfigActions::Set { key, value } => {
            session.config.set(&key, &value)?;
            session.save_config()?;
            if key == "park" {
                session.park = session.config.park()?;
            }
            println!("Updated {}", key);
        }
    }
    Ok(())
}

pub fn list_parks(session: &Session) -> Result<()> {
    for park in PARKS {
        let marker = if park.slug == session.park.slug { "*" } else { " " };
        println!("{} {:<38} {} ({})", marker, park.slug, park, park.timezone);
    }
    Ok(())
}
