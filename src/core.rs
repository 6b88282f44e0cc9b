use crate::catalog;
use crate::reconcile::{self, Reconciliation};
use crate::scrape::{self, Selector};
use crate::Game;
use failure::{Error, ResultExt, ensure};
use log::info;
use reqwest::blocking::Client;
use serde_derive::{Deserialize, Serialize};
use serde_json::{from_str, to_string_pretty};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "cheevo_gap.config";

const ACHIEVEMENTS_URL: &str = "https://retroachievements.org/gameList.php?c=21";
const ACHIEVEMENTS_SELECTOR: &str = ".table-wrapper td.w-full a";
const ACHIEVEMENTS_DOMAIN: &str = "https://retroachievements.org";
const ARCHIVES_URL: &str = "https://archive.org/download/redumpSonyPlaystation2UsaGames2018Aug01/";
const ARCHIVES_SELECTOR: &str = ".directory-listing-table a";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub achievements: Source, // reference list
    pub archives: Vec<Source> // candidate pages, concatenated in order
}

/// One listing page and how to read its links.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Source {
    pub url: String,
    pub selector: String,
    /// Prefix for the scraped hrefs. Defaults to the page url itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_domain: Option<String>
}

impl Source {
    pub fn new(url: &str, selector: &str, url_domain: Option<&str>) -> Source {
        Source {
            url: url.to_string(),
            selector: selector.to_string(),
            url_domain: url_domain.map(String::from)
        }
    }

    pub fn url_domain(&self) -> String {
        match &self.url_domain {
            Some(domain) => domain.clone(),
            None if self.url.ends_with('/') => self.url.clone(),
            None => format!("{}/", self.url)
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            achievements: Source::new(ACHIEVEMENTS_URL, ACHIEVEMENTS_SELECTOR, Some(ACHIEVEMENTS_DOMAIN)),
            archives: vec![Source::new(ARCHIVES_URL, ARCHIVES_SELECTOR, None)]
        }
    }
}

impl Config {
    fn validate(&self) -> Result<(), Error> {
        ensure!(!self.archives.is_empty(), "No archive pages configured.");
        for source in std::iter::once(&self.achievements).chain(self.archives.iter()) {
            Selector::parse(&source.selector)
                .with_context(|_| format!("bad selector for `{}`", source.url))?;
        }
        Ok(())
    }
}

pub fn create_config(path: &Path) -> Result<(), Error> {
    let new_conf = to_string_pretty(&Config::default())?;
    fs::write(path, new_conf)
        .with_context(|_| format!("Can't write: {}", path.display()))?;
    Ok(())
}

pub fn config(path: &Path) -> Result<Config, Error> {
    let conf = fs::read_to_string(path)
        .with_context(|_| format!("Can't open: {}", path.display()))?;
    let conf: Config = from_str(&conf)
        .with_context(|_| format!("Can't parse: {}", path.display()))?;
    conf.validate()?;
    Ok(conf)
}

/// Downloads one listing page and keeps its game entries.
pub fn source_catalog(client: &Client, source: &Source) -> Result<Vec<Game>, Error> {
    let selector = Selector::parse(&source.selector)?;
    let entries = scrape::fetch_entries(client, &source.url, &selector)?;
    Ok(catalog::build_catalog(&entries, &source.url_domain()))
}

/// Fetches the achievement list and every archive page, then reconciles
/// the achievement games against the archives.
pub fn find_missing(client: &Client, config: &Config, mut progress: impl FnMut(&Source, usize)) -> Result<Reconciliation, Error> {
    let achievements = source_catalog(client, &config.achievements)?;
    progress(&config.achievements, achievements.len());

    let mut archives = Vec::new();
    for source in &config.archives {
        let games = source_catalog(client, source)?;
        progress(source, games.len());
        archives.extend(games);
    }

    let result = reconcile::reconcile(&achievements, &archives);
    info!("{} games missing, {} matched", result.missing.len(), result.matched.len());
    Ok(result)
}
