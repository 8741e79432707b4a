/*!
 * Vocabulary records and filters.
 *
 * Word lists are JSON arrays of records keyed the same way the TOCFL
 * extraction writes them (`chineseword`, `pinyin`, `grammar`, `levels`,
 * `lowest_level`, `translations`, `frequency_score`). Filters borrow from
 * the list and keep its order.
 */

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::errors::VocabularyError;

/// TOCFL proficiency band, ordered from lowest to highest
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Foundation,
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels from lowest to highest
    pub const ALL: [Level; 4] = [
        Level::Foundation,
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "foundation" => Ok(Self::Foundation),
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(VocabularyError::UnknownLevel(s.to_string())),
        }
    }
}

/// One vocabulary record
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WordEntry {
    /// Chinese characters
    pub chineseword: String,

    /// Pinyin with tone marks
    #[serde(default)]
    pub pinyin: String,

    /// Grammar category such as `N`, `V` or `(Vs)/N`
    #[serde(default)]
    pub grammar: String,

    /// Every level the word appears in
    #[serde(default)]
    pub levels: Vec<Level>,

    #[serde(default)]
    pub lowest_level: Option<Level>,

    #[serde(default)]
    pub translations: Vec<String>,

    #[serde(default)]
    pub frequency_score: Option<f64>,
}

impl WordEntry {
    pub fn new(chineseword: &str, pinyin: &str, translations: &[&str]) -> Self {
        Self {
            chineseword: chineseword.to_string(),
            pinyin: pinyin.to_string(),
            grammar: String::new(),
            levels: Vec::new(),
            lowest_level: None,
            translations: translations.iter().map(|t| t.to_string()).collect(),
            frequency_score: None,
        }
    }

    /// First translation, or an empty string when there is none
    pub fn first_translation(&self) -> &str {
        self.translations.first().map(String::as_str).unwrap_or("")
    }

    /// Pronunciation, characters and translation in header argument order
    pub fn header_parts(&self) -> (&str, &str, &str) {
        (&self.pinyin, &self.chineseword, self.first_translation())
    }
}

/// Decode a JSON array of vocabulary records
pub fn parse_entries(json: &str) -> Result<Vec<WordEntry>, VocabularyError> {
    let entries: Vec<WordEntry> = serde_json::from_str(json)?;
    debug!("Parsed {} vocabulary records", entries.len());
    Ok(entries)
}

/// Record field searched by text filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Chinese,
    Pinyin,
    Grammar,
    /// Lowest level name, empty when the record has none
    Level,
}

impl Field {
    fn value<'a>(&self, entry: &'a WordEntry) -> &'a str {
        match self {
            Self::Chinese => &entry.chineseword,
            Self::Pinyin => &entry.pinyin,
            Self::Grammar => &entry.grammar,
            Self::Level => entry.lowest_level.map(Level::as_str).unwrap_or(""),
        }
    }
}

/// Predicate over a vocabulary record
#[derive(Debug, Clone, PartialEq)]
pub enum WordFilter {
    /// Lowest level equals the given level
    Level(Level),
    /// Grammar category, case-insensitive, with or without parentheses
    Grammar(String),
    /// Word appears in at least this many levels
    MultipleLevels(usize),
    /// Word appears in the given level
    AppearsIn(Level),
    /// Any translation contains the query; `exact` matches whole words only
    Translation { query: String, exact: bool },
    /// Field contains the query; `normalize` ignores pinyin tone marks
    Text { field: Field, query: String, normalize: bool },
}

impl WordFilter {
    pub fn matches(&self, entry: &WordEntry) -> bool {
        match self {
            Self::Level(level) => entry.lowest_level == Some(*level),
            Self::Grammar(grammar) => grammar_matches(&entry.grammar, grammar),
            Self::MultipleLevels(min_levels) => entry.levels.len() >= *min_levels,
            Self::AppearsIn(level) => entry.levels.contains(level),
            Self::Translation { query, exact } => {
                let query = query.to_lowercase();
                entry
                    .translations
                    .iter()
                    .any(|trans| translation_matches(trans, &query, *exact))
            }
            Self::Text { field, query, normalize } => {
                let normalize = *normalize && *field == Field::Pinyin;
                let mut query = query.to_lowercase();
                let mut value = field.value(entry).to_lowercase();
                if normalize {
                    query = normalize_pinyin(&query);
                    value = normalize_pinyin(&value);
                }
                value.contains(&query)
            }
        }
    }
}

fn grammar_matches(grammar: &str, wanted: &str) -> bool {
    let grammar = grammar.to_uppercase();
    let wanted = wanted.to_uppercase();
    let wrapped = format!("({})", wanted);

    grammar == wanted
        || grammar == wrapped
        || grammar.starts_with(&format!("{}/", wanted))
        || grammar.starts_with(&format!("{}/", wrapped))
}

fn translation_matches(translation: &str, query: &str, exact: bool) -> bool {
    let translation = translation.to_lowercase();
    if exact {
        translation
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| ".,;()[]".contains(c)))
            .any(|word| word == query)
    } else {
        translation.contains(query)
    }
}

/// Apply every filter in sequence, keeping the records that pass all of them
pub fn apply_filters<'a>(entries: &'a [WordEntry], filters: &[WordFilter]) -> Vec<&'a WordEntry> {
    let kept: Vec<&WordEntry> = entries
        .iter()
        .filter(|entry| filters.iter().all(|filter| filter.matches(entry)))
        .collect();

    debug!(
        "Filters kept {} of {} records",
        kept.len(),
        entries.len()
    );
    kept
}

pub fn filter_by_level(entries: &[WordEntry], level: Level) -> Vec<&WordEntry> {
    apply_filters(entries, &[WordFilter::Level(level)])
}

pub fn filter_by_grammar<'a>(entries: &'a [WordEntry], grammar: &str) -> Vec<&'a WordEntry> {
    apply_filters(entries, &[WordFilter::Grammar(grammar.to_string())])
}

pub fn filter_by_multiple_levels(entries: &[WordEntry], min_levels: usize) -> Vec<&WordEntry> {
    apply_filters(entries, &[WordFilter::MultipleLevels(min_levels)])
}

pub fn filter_by_translation<'a>(
    entries: &'a [WordEntry],
    query: &str,
    exact: bool,
) -> Vec<&'a WordEntry> {
    apply_filters(
        entries,
        &[WordFilter::Translation { query: query.to_string(), exact }],
    )
}

pub fn filter_by_text<'a>(
    entries: &'a [WordEntry],
    field: Field,
    query: &str,
    normalize: bool,
) -> Vec<&'a WordEntry> {
    apply_filters(
        entries,
        &[WordFilter::Text { field, query: query.to_string(), normalize }],
    )
}

/// Sort records by frequency score, highest first. Missing scores sort as zero.
pub fn sort_by_frequency<'a>(entries: &[&'a WordEntry]) -> Vec<&'a WordEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let a = a.frequency_score.unwrap_or(0.0);
        let b = b.frequency_score.unwrap_or(0.0);
        b.total_cmp(&a)
    });
    sorted
}

/// Number of records per lowest level; every level is present, possibly with zero
pub fn level_counts(entries: &[WordEntry]) -> BTreeMap<Level, usize> {
    let mut counts: BTreeMap<Level, usize> = Level::ALL.iter().map(|level| (*level, 0)).collect();
    for level in entries.iter().filter_map(|entry| entry.lowest_level) {
        *counts.entry(level).or_insert(0) += 1;
    }
    counts
}

/// Remove tone marks from pinyin, e.g. `nǐ hǎo` becomes `ni hao`.
///
/// The text is canonically decomposed and every combining mark dropped, so
/// `ü`, `ế` and other accented letters fold to their base letter.
pub fn normalize_pinyin(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
