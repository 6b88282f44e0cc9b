use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_REGION: &str = "USA";
pub const DEFAULT_EXTENSION: &str = "ZIP";

// Applied in order, longest numeral first.
const ROMAN_NUMERALS: [(&str, &str); 6] = [
    ("IX", "9"),
    ("VIII", "8"),
    ("VII", "7"),
    ("IV", "4"),
    ("III", "3"),
    ("II", "2"),
];
const ARCHIVE_EXTENSIONS: [&str; 2] = ["ZIP", "7Z"];
const RESERVED_NAMES: [&str; 4] = ["WALT", "DISNEYS", "DISNEY", "PIXAR"];
const RESERVED_CHARS: [char; 14] = [
    '|', ':', '&', ',', '.', '/', '\'', '-', '!', '(', ')', '[', ']', ' ',
];

// These run before uppercasing, hence case-insensitive.
// e.g. "(v1.1)", "(En,Fr,De,Es,It)", "(Disc 1)"
static VERSION_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(V[0-9]\.[0-9]\w*\)").unwrap());
static LANGUAGE_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(([A-Z][A-Z],)+[A-Z][A-Z]\)").unwrap());
static DISC_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(DISC +[0-9]\)").unwrap());

/// Canonical key of a title with the default region (`USA`) and extension (`ZIP`).
///
/// ```
/// use cheevo_gap::normalize::normalize;
/// assert_eq!(normalize("Final Fantasy VIII"), "FINALFANTASY8");
/// ```
pub fn normalize(text: &str) -> String {
    normalize_with(text, DEFAULT_REGION, DEFAULT_EXTENSION)
}

/// Maps a listing title to an uppercase, punctuation-free key so that
/// differently formatted listings of the same game compare equal.
///
/// Alternate titles after `|` are dropped, a trailing `, Article` is moved
/// to the front, roman numerals become digits, version/language/disc tags
/// are stripped, and then the region, extensions, publisher names and
/// punctuation are removed from the uppercased text.
pub fn normalize_with(text: &str, main_region: &str, extension: &str) -> String {
    let text = primary_title(text);
    let mut text = move_article(text);

    for (numeral, digit) in ROMAN_NUMERALS.iter() {
        text = text.replace(numeral, digit);
    }

    let text = VERSION_TAG.replace_all(&text, "");
    let text = LANGUAGE_LIST.replace_all(&text, "");
    let text = DISC_MARKER.replace_all(&text, "");

    let mut text = text.to_uppercase();
    for ext in ARCHIVE_EXTENSIONS.iter() {
        text = text.replace(ext, "");
    }
    text = text.replace("2ND", "SECOND");
    text = remove(&text, main_region);
    text = remove(&text, extension);
    for name in RESERVED_NAMES.iter() {
        text = text.replace(name, "");
    }
    text.retain(|c| !RESERVED_CHARS.contains(&c));
    text
}

/// "Digimon World 2003 | Digimon World 3" -> "Digimon World 2003 "
fn primary_title(text: &str) -> &str {
    text.split('|').next().unwrap_or(text)
}

/// "Bugs Life, A" -> " ABugs Life". Anything after a second comma is dropped.
fn move_article(text: &str) -> String {
    let mut parts = text.split(',');
    match (parts.next(), parts.next()) {
        (Some(title), Some(article)) => format!("{}{}", article, title),
        _ => text.to_string()
    }
}

fn remove(text: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }
    text.replace(pattern, "")
}
