//! Park catalog
//!
//! Each park belongs to a resort (which selects the alias table) and carries
//! the IANA zone its clocks run on.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resort {
    WaltDisneyWorld,
    Disneyland,
}

impl fmt::Display for Resort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resort::WaltDisneyWorld => f.write_str("Walt Disney World"),
            Resort::Disneyland => f.write_str("Disneyland Resort"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Park {
    /// Identifier used in config and by the live-data API.
    pub slug: &'static str,
    pub name: &'static str,
    pub resort: Resort,
    pub timezone: Tz,
}

pub const DEFAULT_PARK: &str = "waltdisneyworldmagickingdom";

pub static PARKS: &[Park] = &[
    Park {
        slug: "waltdisneyworldmagickingdom",
        name: "Magic Kingdom",
        resort: Resort::WaltDisneyWorld,
        timezone: chrono_tz::America::New_York,
    },
    Park {
        slug: "waltdisneyworldepcot",
        name: "EPCOT",
        resort: Resort::WaltDisneyWorld,
        timezone: chrono_tz::America::New_York,
    },
    Park {
        slug: "waltdisneyworldhollywoodstudios",
        name: "Disney's Hollywood Studios",
        resort: Resort::WaltDisneyWorld,
        timezone: chrono_tz::America::New_York,
    },
    Park {
        slug: "waltdisneyworldanimalkingdom",
        name: "Disney's Animal Kingdom",
        resort: Resort::WaltDisneyWorld,
        timezone: chrono_tz::America::New_York,
    },
    Park {
        slug: "disneylandresortmagickingdom",
        name: "Disneyland Park",
        resort: Resort::Disneyland,
        timezone: chrono_tz::America::Los_Angeles,
    },
    Park {
        slug: "disneylandresortcaliforniaadventure",
        name: "Disney California Adventure",
        resort: Resort::Disneyland,
        timezone: chrono_tz::America::Los_Angeles,
    },
];

impl Park {
    /// Look up a park by slug (case-insensitive).
    pub fn find(slug: &str) -> Option<&'static Park> {
        let slug = slug.trim();
        PARKS.iter().find(|park| park.slug.eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for Park {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.resort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_park_is_in_catalog() {
        let park = Park::find(DEFAULT_PARK).unwrap();
        assert_eq!(park.resort, Resort::WaltDisneyWorld);
    }

    #[test]
    fn find_is_case_insensitive() {
        let park = Park::find(" DisneylandResortCaliforniaAdventure ").unwrap();
        assert_eq!(park.name, "Disney California Adventure");
        assert!(Park::find("nowhere").is_none());
    }
}
