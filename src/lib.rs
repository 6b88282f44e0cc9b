pub mod catalog;
pub mod core;
pub mod normalize;
pub mod reconcile;
pub mod scrape;

use serde_derive::Serialize;

/// One game listing, either an achievement set or an archive file.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Game {
    pub name: String,
    pub keyword: String, // normalized name, the only field used for matching
    pub url: String
}

impl Game {
    pub fn new(name: &str, keyword: &str, url: &str) -> Game {
        Game {
            name: name.to_string(),
            keyword: keyword.to_string(),
            url: url.to_string()
        }
    }

    /// Builds a game from a scraped anchor, prefixing its href with `url_domain`.
    pub fn from_entry(entry: &RawEntry, url_domain: &str) -> Game {
        Game {
            name: entry.text.clone(),
            keyword: normalize::normalize(&entry.text),
            url: format!("{}{}", url_domain, entry.href)
        }
    }
}

/// Text and href of an anchor as found on a listing page.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RawEntry {
    pub text: String,
    pub href: String
}

impl RawEntry {
    pub fn new(text: &str, href: &str) -> RawEntry {
        RawEntry { text: text.to_string(), href: href.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entry_normalizes_name_and_joins_url() {
        let entry = RawEntry::new("God of War", "/game/2782");
        let game = Game::from_entry(&entry, "https://retroachievements.org");
        assert_eq!(game, Game::new("God of War", "GODOFWAR", "https://retroachievements.org/game/2782"));
    }

    #[test]
    fn from_entry_keeps_archive_file_name() {
        let domain = "https://archive.org/download/redumpSonyPlaystation2UsaGames2018Aug01/";
        let entry = RawEntry::new("Armored Core 2 (USA).7z", "Armored%20Core%202%20%28USA%29.7z");
        let game = Game::from_entry(&entry, domain);
        assert_eq!(game.name, "Armored Core 2 (USA).7z");
        assert_eq!(game.keyword, "ARMOREDCORE2");
        assert_eq!(game.url, format!("{}Armored%20Core%202%20%28USA%29.7z", domain));
    }
}
