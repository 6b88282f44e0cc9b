use crate::{Game, RawEntry};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

const VIEW_CONTENTS: &str = "View Contents";
const PARENT_DIRECTORY: &str = " Go to parent directory";

// e.g. "~Homebrew~ Tetris"
static HOMEBREW: Lazy<Regex> = Lazy::new(|| Regex::new(r"~\w+~").unwrap());
// e.g. "Spyro the Dragon [Subset - Bonus]"
static SUBSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[a-zA-Z \-]+\]").unwrap());

/// Tells listing rows that are real games from homebrew entries, achievement
/// subsets and the navigation links of a directory listing.
pub fn is_valid_entry(text: &str) -> bool {
    !(HOMEBREW.is_match(text)
        || SUBSET.is_match(text)
        || text.contains(VIEW_CONTENTS)
        || text.contains(PARENT_DIRECTORY))
}

/// Keeps valid entries, in listing order, and turns each into a `Game`.
pub fn build_catalog(entries: &[RawEntry], url_domain: &str) -> Vec<Game> {
    entries
        .iter()
        .filter(|entry| {
            let valid = is_valid_entry(&entry.text);
            if !valid {
                trace!("Skipping entry: {}", entry.text);
            }
            valid
        })
        .map(|entry| Game::from_entry(entry, url_domain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("~Homebrew~ Tetris" ; "homebrew")]
    #[test_case("~Hack~ Crash Bandicoot: Back in Time" ; "hack")]
    #[test_case("Spyro the Dragon [Subset - Bonus]" ; "subset")]
    #[test_case("View Contents" ; "view contents")]
    #[test_case("Ape Escape (USA).zip View Contents" ; "view contents suffix")]
    #[test_case(" Go to parent directory" ; "parent directory")]
    fn rejects(text: &str) {
        assert!(!is_valid_entry(text));
    }

    #[test_case("God of War" ; "plain")]
    #[test_case("Armored Core 2 (USA).7z" ; "archive")]
    #[test_case("Go to parent directory" ; "parent directory without leading space")]
    #[test_case("Mega Man X4 [!]" ; "bracket without letters")]
    #[test_case("Spyro 2: Ripto's Rage! | Spyro 2: Gateway to Glimmer" ; "alternate title")]
    #[test_case("" ; "empty")]
    fn accepts(text: &str) {
        assert!(is_valid_entry(text));
    }

    #[test]
    fn build_keeps_order_and_duplicates() {
        let entries = vec![
            RawEntry::new(" Go to parent directory", "../"),
            RawEntry::new("Ape Escape (USA).zip", "Ape%20Escape%20%28USA%29.zip"),
            RawEntry::new("View Contents", "Ape%20Escape%20%28USA%29.zip/"),
            RawEntry::new("Final Fantasy VIII (USA) (Disc 1).zip", "ff8-1.zip"),
            RawEntry::new("Final Fantasy VIII (USA) (Disc 2).zip", "ff8-2.zip"),
        ];
        let games = build_catalog(&entries, "https://archive.org/download/redump.psx/");

        assert_eq!(games, vec![
            Game::new("Ape Escape (USA).zip", "APEESCAPE", "https://archive.org/download/redump.psx/Ape%20Escape%20%28USA%29.zip"),
            Game::new("Final Fantasy VIII (USA) (Disc 1).zip", "FINALFANTASY8", "https://archive.org/download/redump.psx/ff8-1.zip"),
            Game::new("Final Fantasy VIII (USA) (Disc 2).zip", "FINALFANTASY8", "https://archive.org/download/redump.psx/ff8-2.zip"),
        ]);
    }

    #[test]
    fn build_without_domain_keeps_href() {
        let entries = vec![RawEntry::new("God of War", "/game/2782")];
        let games = build_catalog(&entries, "");
        assert_eq!(games, vec![Game::new("God of War", "GODOFWAR", "/game/2782")]);
    }

    #[test]
    fn build_never_keeps_invalid_entries() {
        let entries = vec![
            RawEntry::new("~Homebrew~ Tetris", "/game/1"),
            RawEntry::new("Spyro the Dragon [Subset - Bonus]", "/game/2"),
            RawEntry::new("View Contents", "x/"),
            RawEntry::new(" Go to parent directory", "../"),
        ];
        assert!(build_catalog(&entries, "").is_empty());
    }
}
