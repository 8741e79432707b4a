/*!
 * Tests for vocabulary records and filters
 */

use anyhow::Result;
use hanzi_sheets::errors::VocabularyError;
use hanzi_sheets::vocabulary::{
    apply_filters, filter_by_grammar, filter_by_level, filter_by_multiple_levels, filter_by_text,
    filter_by_translation, level_counts, normalize_pinyin, parse_entries, sort_by_frequency, Field,
    Level, WordEntry, WordFilter,
};

use crate::common::sample_entries;

fn words(entries: &[&WordEntry]) -> Vec<String> {
    entries.iter().map(|e| e.chineseword.clone()).collect()
}

#[test]
fn test_parse_entries_withSampleList_shouldReadAllFields() {
    let entries = sample_entries();

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[1].chineseword, "冰箱");
    assert_eq!(entries[1].levels, vec![Level::Intermediate, Level::Beginner]);
    assert_eq!(entries[1].lowest_level, Some(Level::Beginner));
    assert_eq!(entries[3].frequency_score, None);
}

#[test]
fn test_parse_entries_withMissingOptionalFields_shouldUseDefaults() -> Result<()> {
    let entries = parse_entries(r#"[{"chineseword": "人"}]"#)?;

    assert_eq!(entries[0].pinyin, "");
    assert!(entries[0].levels.is_empty());
    assert!(entries[0].lowest_level.is_none());
    assert!(entries[0].translations.is_empty());
    Ok(())
}

#[test]
fn test_parse_entries_withInvalidJson_shouldReturnParseError() {
    assert!(matches!(parse_entries("{not json"), Err(VocabularyError::Parse(_))));
    assert!(matches!(
        parse_entries(r#"[{"chineseword": "人", "lowest_level": "expert"}]"#),
        Err(VocabularyError::Parse(_))
    ));
}

#[test]
fn test_level_from_str_withNames_shouldParseCaseInsensitively() {
    assert_eq!("beginner".parse::<Level>().unwrap(), Level::Beginner);
    assert_eq!(" Advanced ".parse::<Level>().unwrap(), Level::Advanced);
    assert!(matches!("expert".parse::<Level>(), Err(VocabularyError::UnknownLevel(_))));
    assert_eq!(Level::Intermediate.to_string(), "intermediate");
    assert!(Level::Foundation < Level::Advanced);
}

#[test]
fn test_first_translation_withAndWithoutTranslations_shouldFallBackToEmpty() {
    let entries = sample_entries();

    assert_eq!(entries[0].first_translation(), "hello; hi");
    assert_eq!(entries[3].first_translation(), "");
    assert_eq!(entries[1].header_parts(), ("bīngxiāng", "冰箱", "refrigerator"));
}

#[test]
fn test_filter_by_level_withFoundation_shouldMatchLowestLevelOnly() {
    let entries = sample_entries();

    assert_eq!(words(&filter_by_level(&entries, Level::Foundation)), vec!["你好", "開"]);
    assert!(filter_by_level(&entries, Level::Advanced).is_empty());
}

#[test]
fn test_filter_by_grammar_withPlainAndParenthesisedForms_shouldMatch() {
    let entries = sample_entries();

    assert_eq!(words(&filter_by_grammar(&entries, "n")), vec!["冰箱"]);
    assert_eq!(words(&filter_by_grammar(&entries, "V")), vec!["開"]);
    assert_eq!(words(&filter_by_grammar(&entries, "vs")), vec!["綠"]);
    assert!(filter_by_grammar(&entries, "Vpt").is_empty());
}

#[test]
fn test_filter_by_multiple_levels_withMinimum_shouldCountLevels() {
    let entries = sample_entries();

    assert_eq!(words(&filter_by_multiple_levels(&entries, 2)), vec!["冰箱", "開"]);
    assert_eq!(words(&filter_by_multiple_levels(&entries, 3)), vec!["開"]);
}

#[test]
fn test_filter_by_translation_withSubstringAndExact_shouldDiffer() {
    let entries = sample_entries();

    assert_eq!(words(&filter_by_translation(&entries, "fridge", false)), vec!["冰箱"]);
    assert_eq!(words(&filter_by_translation(&entries, "OPEN", true)), vec!["開"]);
    assert_eq!(words(&filter_by_translation(&entries, "hell", false)), vec!["你好"]);
    assert!(filter_by_translation(&entries, "hell", true).is_empty());
    // Punctuation around a word is ignored for exact matches
    assert_eq!(words(&filter_by_translation(&entries, "hello", true)), vec!["你好"]);
}

#[test]
fn test_filter_by_text_withPinyinNormalization_shouldIgnoreTones() {
    let entries = sample_entries();

    assert!(filter_by_text(&entries, Field::Pinyin, "ni hao", false).is_empty());
    assert_eq!(words(&filter_by_text(&entries, Field::Pinyin, "ni hao", true)), vec!["你好"]);
    assert_eq!(words(&filter_by_text(&entries, Field::Pinyin, "lu", true)), vec!["綠"]);
    assert_eq!(words(&filter_by_text(&entries, Field::Chinese, "箱", false)), vec!["冰箱"]);
}

#[test]
fn test_filter_by_text_withNormalizeOnOtherFields_shouldMatchLiterally() {
    let entries = sample_entries();

    assert_eq!(words(&filter_by_text(&entries, Field::Grammar, "vs", true)), vec!["綠"]);
    assert_eq!(words(&filter_by_text(&entries, Field::Chinese, "箱", true)), vec!["冰箱"]);
    // Tone marks in a non-pinyin query are kept, so nothing matches
    assert!(filter_by_text(&entries, Field::Grammar, "vś", true).is_empty());
}

#[test]
fn test_filter_by_text_withLevelField_shouldMatchLowestLevelName() -> Result<()> {
    let mut entries = sample_entries();
    entries.extend(parse_entries(r#"[{"chineseword": "人"}]"#)?);

    assert_eq!(words(&filter_by_text(&entries, Field::Level, "begin", false)), vec!["冰箱", "綠"]);
    assert_eq!(words(&filter_by_text(&entries, Field::Level, "FOUND", false)), vec!["你好", "開"]);
    assert!(filter_by_text(&entries, Field::Level, "advanced", false).is_empty());
    // Records without a level only match the empty query
    assert_eq!(filter_by_text(&entries, Field::Level, "", false).len(), 5);
    Ok(())
}

#[test]
fn test_apply_filters_withSeveralFilters_shouldRequireAll() {
    let entries = sample_entries();
    let filters = vec![
        WordFilter::AppearsIn(Level::Foundation),
        WordFilter::MultipleLevels(2),
        WordFilter::Translation { query: "boil".to_string(), exact: false },
    ];

    assert_eq!(words(&apply_filters(&entries, &filters)), vec!["開"]);
    assert_eq!(apply_filters(&entries, &[]).len(), entries.len());
}

#[test]
fn test_sort_by_frequency_withScores_shouldSortDescending() {
    let entries = sample_entries();
    let all: Vec<&WordEntry> = entries.iter().collect();

    assert_eq!(words(&sort_by_frequency(&all)), vec!["開", "你好", "冰箱", "綠"]);
}

#[test]
fn test_level_counts_withSample_shouldIncludeEmptyLevels() {
    let counts = level_counts(&sample_entries());

    assert_eq!(counts[&Level::Foundation], 2);
    assert_eq!(counts[&Level::Beginner], 2);
    assert_eq!(counts[&Level::Intermediate], 0);
    assert_eq!(counts[&Level::Advanced], 0);
}

#[test]
fn test_normalize_pinyin_withToneMarks_shouldStripThem() {
    assert_eq!(normalize_pinyin("nǐ hǎo"), "ni hao");
    assert_eq!(normalize_pinyin("bīngxiāng"), "bingxiang");
    assert_eq!(normalize_pinyin("lǜ"), "lu");
    assert_eq!(normalize_pinyin("Zhōngguó"), "Zhongguo");
    // Decomposed tone mark
    assert_eq!(normalize_pinyin("ma\u{0300}"), "ma");
    assert_eq!(normalize_pinyin("中文"), "中文");
}

#[test]
fn test_normalize_pinyin_withPrecomposedAccents_shouldFoldToBaseLetter() {
    assert_eq!(normalize_pinyin("ế"), "e");
    assert_eq!(normalize_pinyin("ề"), "e");
    assert_eq!(normalize_pinyin("ê\u{304}"), "e");
    assert_eq!(normalize_pinyin("ǚ"), "u");
    assert_eq!(normalize_pinyin("ñ ç"), "n c");
}
