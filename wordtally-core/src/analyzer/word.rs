//! Word-boundary analysis (UAX #29 with locale tailoring)

use super::{AnalyzerKind, BoundaryAnalyzer, BoundaryCollector};
use crate::boundary::{SegmentClass, Segmentation};
use crate::error::{CoreError, Result};
use crate::locale::Locale;
use crate::snapshot::TextSnapshot;
use icu_segmenter::options::{WordBreakInvariantOptions, WordBreakOptions};
use icu_properties::props::{Ideographic, Script, WordBreak};
use icu_properties::{CodePointMapData, CodePointSetData};
use icu_segmenter::{WordSegmenter, WordSegmenterBorrowed};

/// Word-mode analyzer
///
/// Uses the ICU4X word segmenter in auto mode: rule-based breaking for
/// space-delimited scripts plus dictionary/LSTM breaking for Thai, Lao,
/// Khmer, Myanmar, Chinese and Japanese. A segment is [`SegmentClass::WordLike`]
/// when the rule status the segmenter reports for it is letter, number, kana
/// or ideographic, or when it contains a scalar of one of those classes, and
/// [`SegmentClass::NonWord`] otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordAnalyzer;

impl WordAnalyzer {
    /// Create a new word analyzer
    pub fn new() -> Self {
        Self
    }
}

impl BoundaryAnalyzer for WordAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Word
    }

    fn segment(&self, snapshot: &TextSnapshot, locale: &Locale) -> Result<Segmentation> {
        let text = snapshot.as_str();

        match locale.language_identifier()? {
            None => Ok(scan(
                WordSegmenter::new_auto(WordBreakInvariantOptions::default()),
                text,
            )),
            Some(id) => {
                let mut options = WordBreakOptions::default();
                options.content_locale = Some(&id);
                let tailored = WordSegmenter::try_new_auto(options).map_err(|e| {
                    tracing::debug!(locale = %locale, error = %e, "no word break data");
                    CoreError::UnsupportedLocale {
                        tag: locale.to_string(),
                    }
                })?;
                Ok(scan(tailored.as_borrowed(), text))
            }
        }
    }
}

fn scan(segmenter: WordSegmenterBorrowed<'_>, text: &str) -> Segmentation {
    let mut collector = BoundaryCollector::new(text);
    let mut classes = Vec::new();

    let mut breaks = segmenter.segment_str(text);
    while let Some(byte_offset) = breaks.next() {
        let start = collector.last().byte_offset;
        if collector.push(byte_offset) {
            let word_like = breaks.is_word_like() || has_word_content(&text[start..byte_offset]);
            classes.push(SegmentClass::from_word_like(word_like));
        }
    }

    // The segmenter always reports the end of the text as a break
    let start = collector.last().byte_offset;
    if !collector.is_complete() && collector.push(text.len()) {
        classes.push(SegmentClass::from_word_like(has_word_content(&text[start..])));
    }

    tracing::trace!(
        segments = classes.len(),
        bytes = text.len(),
        "word segmentation complete"
    );

    Segmentation::new(collector.into_boundaries(), Some(classes))
}

const WORD_BREAK_CLASSES: [WordBreak; 4] = [
    WordBreak::ALetter,
    WordBreak::HebrewLetter,
    WordBreak::Numeric,
    WordBreak::Katakana,
];

/// Whether `segment` holds a letter, number, kana or ideograph
///
/// The segmenter reports no rule status for a segment whose last scalar is
/// Extend, Format or ZWJ when more text follows, as for `cafe\u{301}` in
/// `cafe\u{301} au lait`.
fn has_word_content(segment: &str) -> bool {
    let word_break = CodePointMapData::<WordBreak>::new();
    let script = CodePointMapData::<Script>::new();
    let ideographic = CodePointSetData::new::<Ideographic>();

    segment.chars().any(|ch| {
        WORD_BREAK_CLASSES.contains(&word_break.get(ch))
            || ideographic.contains(ch)
            || script.get(ch) == Script::Hiragana
    })
}
