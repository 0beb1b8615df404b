//! Word segmentation across scripts and locales

use wordtally_core::{BoundaryAnalyzer, Locale, SegmentClass, TextSnapshot, WordAnalyzer};

fn word_like(text: &str, locale: &str) -> Vec<String> {
    WordAnalyzer::new()
        .segment(&TextSnapshot::new(text), &Locale::new(locale))
        .unwrap()
        .segments()
        .filter(|s| s.is_word_like())
        .map(|s| s.text(text).to_string())
        .collect()
}

#[test]
fn test_english_sentence() {
    let words = word_like("The quick (brown) fox -- jumps!", "en");
    assert_eq!(words, vec!["The", "quick", "brown", "fox", "jumps"]);
}

#[test]
fn test_thai_without_spaces() {
    // "hello" + polite particle, written without a space
    let words = word_like("สวัสดีครับ", "th");
    assert!(words.len() >= 2, "dictionary breaking should split Thai: {words:?}");
    assert_eq!(words.concat(), "สวัสดีครับ");
}

#[test]
fn test_japanese_mixed_scripts() {
    let text = "これはテストです。";
    let segmentation = WordAnalyzer::new()
        .segment(&TextSnapshot::new(text), &Locale::new("ja"))
        .unwrap();

    assert!(segmentation.word_like_count() > 1);
    // The ideographic full stop is never a word
    let last = segmentation.segments().last().unwrap();
    assert_eq!(last.text(text), "。");
    assert_eq!(last.class, Some(SegmentClass::NonWord));
}

#[test]
fn test_chinese_ideographs_are_word_like() {
    let text = "我喜欢读书";
    let segmentation = WordAnalyzer::new()
        .segment(&TextSnapshot::new(text), &Locale::new("zh"))
        .unwrap();

    assert!(segmentation.word_like_count() >= 1);
    assert!(segmentation.segments().all(|s| s.is_word_like()));
}

#[test]
fn test_accented_latin() {
    assert_eq!(word_like("Ça va, François?", "fr"), vec!["Ça", "va", "François"]);
}

#[test]
fn test_decomposed_accents_followed_by_text() {
    assert_eq!(word_like("cafe\u{301} au lait", "fr"), vec!["cafe\u{301}", "au", "lait"]);
    assert_eq!(word_like("cafe\u{301}!", "fr"), vec!["cafe\u{301}"]);
    assert_eq!(word_like("re\u{301}sume\u{301} here", "fr").len(), 2);
}

#[test]
fn test_hindi_vowel_signs() {
    // Each word ends in a dependent vowel sign or a consonant
    assert_eq!(word_like("क्षि हम", "hi"), vec!["क्षि", "हम"]);
    assert_eq!(word_like("नमस्ते दुनिया", "hi").len(), 2);
}

#[test]
fn test_whitespace_only_has_segments_but_no_words() {
    let segmentation = WordAnalyzer::new()
        .segment(&TextSnapshot::new("   \t\n"), &Locale::Default)
        .unwrap();
    assert!(segmentation.segment_count() > 0);
    assert_eq!(segmentation.word_like_count(), 0);
}
