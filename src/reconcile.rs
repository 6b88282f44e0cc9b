use crate::Game;
use log::debug;
use serde_derive::Serialize;
use std::collections::HashMap;

/// Reference games without a counterpart, and the candidates that matched.
#[derive(Debug, PartialEq, Default, Serialize)]
pub struct Reconciliation {
    pub missing: Vec<Game>,
    pub matched: Vec<Game>
}

/// For every reference game, looks up the first candidate with the same
/// keyword. Found candidates go to `matched`, unmatched reference games go
/// to `missing`. Candidates are not consumed: one candidate may match
/// several reference games.
pub fn reconcile(reference: &[Game], candidates: &[Game]) -> Reconciliation {
    let mut index: HashMap<&str, &Game> = HashMap::with_capacity(candidates.len());
    for game in candidates {
        // first occurrence wins
        index.entry(game.keyword.as_str()).or_insert(game);
    }

    let mut result = Reconciliation::default();
    for game in reference {
        match index.get(game.keyword.as_str()) {
            Some(&found) => {
                debug!("Game found: {}", found.keyword);
                result.matched.push(found.clone());
            },
            None => {
                debug!("Game not found: {}", game.keyword);
                result.missing.push(game.clone());
            }
        }
    }
    result
}
