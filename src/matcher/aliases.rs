//! Nickname tables, one per resort
//!
//! Both sides of every entry are stored as normalised keys, so lookups take
//! the output of [`normalize_key`] directly.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::normalize::normalize_key;
use crate::parks::Resort;

/// Maps a normalised nickname to the normalised key of the attraction it means.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut table = Self::new();
        for (alias, canonical) in pairs {
            table.insert(alias, canonical);
        }
        table
    }

    pub fn insert(&mut self, alias: &str, canonical: &str) {
        let alias = normalize_key(alias);
        let canonical = normalize_key(canonical);
        if !alias.is_empty() && !canonical.is_empty() {
            self.entries.insert(alias, canonical);
        }
    }

    /// Canonical key for a normalised alias.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in table for a resort.
    pub fn for_resort(resort: Resort) -> &'static AliasTable {
        match resort {
            Resort::WaltDisneyWorld => &WALT_DISNEY_WORLD,
            Resort::Disneyland => &DISNEYLAND,
        }
    }
}

static WALT_DISNEY_WORLD: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::from_pairs([
        // Magic Kingdom
        ("space mtn", "Space Mountain"),
        ("btmrr", "Big Thunder Mountain Railroad"),
        ("big thunder", "Big Thunder Mountain Railroad"),
        ("thunder", "Big Thunder Mountain Railroad"),
        ("7dmt", "Seven Dwarfs Mine Train"),
        ("mine train", "Seven Dwarfs Mine Train"),
        ("potc", "Pirates of the Caribbean"),
        ("pirates", "Pirates of the Caribbean"),
        ("hm", "Haunted Mansion"),
        ("mansion", "Haunted Mansion"),
        ("splash", "Tiana's Bayou Adventure"),
        ("splash mountain", "Tiana's Bayou Adventure"),
        ("tiana", "Tiana's Bayou Adventure"),
        ("tron", "TRON Lightcycle / Run"),
        ("peter pan", "Peter Pan's Flight"),
        ("jungle cruise", "Jungle Cruise"),
        ("small world", "\"it's a small world\""),
        // Hollywood Studios
        ("rnrc", "Rock 'n' Roller Coaster Starring Aerosmith"),
        ("rock n roller", "Rock 'n' Roller Coaster Starring Aerosmith"),
        ("tot", "The Twilight Zone Tower of Terror"),
        ("tower of terror", "The Twilight Zone Tower of Terror"),
        ("rise", "Star Wars: Rise of the Resistance"),
        ("rotr", "Star Wars: Rise of the Resistance"),
        ("smugglers run", "Millennium Falcon: Smugglers Run"),
        ("slinky", "Slinky Dog Dash"),
        ("mmrr", "Mickey & Minnie's Runaway Railway"),
        // Animal Kingdom
        ("fop", "Avatar Flight of Passage"),
        ("flight of passage", "Avatar Flight of Passage"),
        ("navi", "Na'vi River Journey"),
        ("everest", "Expedition Everest - Legend of the Forbidden Mountain"),
        ("safari", "Kilimanjaro Safaris"),
        // EPCOT
        ("gotg", "Guardians of the Galaxy: Cosmic Rewind"),
        ("cosmic rewind", "Guardians of the Galaxy: Cosmic Rewind"),
        ("soarin", "Soarin' Around the World"),
        ("frozen", "Frozen Ever After"),
        ("remy", "Remy's Ratatouille Adventure"),
        ("ratatouille", "Remy's Ratatouille Adventure"),
    ])
});

static DISNEYLAND: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::from_pairs([
        // Disneyland Park
        ("space mtn", "Space Mountain"),
        ("btmrr", "Big Thunder Mountain Railroad"),
        ("big thunder", "Big Thunder Mountain Railroad"),
        ("matterhorn", "Matterhorn Bobsleds"),
        ("indy", "Indiana Jones Adventure"),
        ("indiana jones", "Indiana Jones Adventure"),
        ("potc", "Pirates of the Caribbean"),
        ("pirates", "Pirates of the Caribbean"),
        ("hm", "Haunted Mansion"),
        ("tiana", "Tiana's Bayou Adventure"),
        ("splash", "Tiana's Bayou Adventure"),
        ("rise", "Star Wars: Rise of the Resistance"),
        ("rotr", "Star Wars: Rise of the Resistance"),
        ("smugglers run", "Millennium Falcon: Smugglers Run"),
        // Disney California Adventure
        ("rsr", "Radiator Springs Racers"),
        ("racers", "Radiator Springs Racers"),
        ("guardians", "Guardians of the Galaxy - Mission: BREAKOUT!"),
        ("mission breakout", "Guardians of the Galaxy - Mission: BREAKOUT!"),
        ("webslingers", "WEB SLINGERS: A Spider-Man Adventure"),
        ("soarin", "Soarin' Around the World"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_normalised_on_insert() {
        let table = AliasTable::from_pairs([("Space Mtn!", "Space Mountain")]);
        assert_eq!(table.resolve("space mtn"), Some("space mountain"));
        assert_eq!(table.resolve("Space Mtn!"), None);
    }

    #[test]
    fn blank_entries_are_ignored() {
        let table = AliasTable::from_pairs([("!!", "Space Mountain"), ("spm", "")]);
        assert!(table.is_empty());
    }

    #[test]
    fn resort_tables_are_scoped() {
        let wdw = AliasTable::for_resort(Resort::WaltDisneyWorld);
        let dlr = AliasTable::for_resort(Resort::Disneyland);
        assert_eq!(wdw.resolve("tot"), Some("the twilight zone tower of terror"));
        assert_eq!(dlr.resolve("tot"), None);
        assert_eq!(dlr.resolve("rsr"), Some("radiator springs racers"));
        assert_eq!(wdw.resolve("rnrc"), Some("rock n roller coaster starring aerosmith"));
    }
}
