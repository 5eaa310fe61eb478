//! @acp:module "Excerpt Generator"
//! @acp:summary "Sentence and paragraph slices of a corpus with optional random start and wraparound"
//! @acp:domain ipsum
//! @acp:layer logic
//!
//! Every caller that needs placeholder text goes through [`ExcerptGenerator`],
//! whether it is a context-menu action, a popup entry or the CLI.
//!
//! With `randomize` off the slice always starts at the first unit of the
//! corpus. With it on, the start is drawn uniformly over the units of the
//! requested granularity: sentences for sentence excerpts, paragraphs for
//! paragraph excerpts.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusIndex;
use crate::error::RciError;

/// Separator between sentences of one excerpt
pub const SENTENCE_SEPARATOR: &str = " ";

/// Separator between paragraphs of one excerpt
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Granularity of an excerpt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcerptUnit {
    Sentence,
    Paragraph,
}

/// @acp:summary "Which excerpt to produce and whether to start at a random unit"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptRequest {
    pub unit: ExcerptUnit,
    pub count: usize,
    pub randomize: bool,
}

impl ExcerptRequest {
    pub fn new(unit: ExcerptUnit, count: usize, randomize: bool) -> Self {
        Self {
            unit,
            count,
            randomize,
        }
    }

    /// Build a request from a menu tag, `None` for unknown tags
    pub fn from_tag(tag: &str, randomize: bool) -> Option<Self> {
        tag.parse::<ExcerptKind>()
            .ok()
            .map(|kind| kind.request(randomize))
    }
}

/// The four menu entries offered for placeholder text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExcerptKind {
    #[serde(rename = "1-sentence")]
    OneSentence,
    #[serde(rename = "2-sentences")]
    TwoSentences,
    #[serde(rename = "1-paragraph")]
    OneParagraph,
    #[serde(rename = "2-paragraphs")]
    TwoParagraphs,
}

impl ExcerptKind {
    /// Menu order
    pub fn all() -> &'static [ExcerptKind] {
        &[
            ExcerptKind::OneSentence,
            ExcerptKind::TwoSentences,
            ExcerptKind::OneParagraph,
            ExcerptKind::TwoParagraphs,
        ]
    }

    /// Wire tag, e.g. `"2-sentences"`
    pub fn tag(&self) -> &'static str {
        match self {
            ExcerptKind::OneSentence => "1-sentence",
            ExcerptKind::TwoSentences => "2-sentences",
            ExcerptKind::OneParagraph => "1-paragraph",
            ExcerptKind::TwoParagraphs => "2-paragraphs",
        }
    }

    /// Menu label, e.g. `"2 Sentences"`
    pub fn label(&self) -> &'static str {
        match self {
            ExcerptKind::OneSentence => "1 Sentence",
            ExcerptKind::TwoSentences => "2 Sentences",
            ExcerptKind::OneParagraph => "1 Paragraph",
            ExcerptKind::TwoParagraphs => "2 Paragraphs",
        }
    }

    pub fn unit(&self) -> ExcerptUnit {
        match self {
            ExcerptKind::OneSentence | ExcerptKind::TwoSentences => ExcerptUnit::Sentence,
            ExcerptKind::OneParagraph | ExcerptKind::TwoParagraphs => ExcerptUnit::Paragraph,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            ExcerptKind::OneSentence | ExcerptKind::OneParagraph => 1,
            ExcerptKind::TwoSentences | ExcerptKind::TwoParagraphs => 2,
        }
    }

    pub fn request(&self, randomize: bool) -> ExcerptRequest {
        ExcerptRequest::new(self.unit(), self.count(), randomize)
    }
}

impl FromStr for ExcerptKind {
    type Err = RciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExcerptKind::all()
            .iter()
            .copied()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| RciError::UnknownExcerpt(s.to_string()))
    }
}

impl fmt::Display for ExcerptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// @acp:summary "Generated excerpt text and where in the corpus it starts"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    pub text: String,
    pub unit: ExcerptUnit,
    /// Index of the first unit, in sentences or paragraphs depending on `unit`
    pub start: usize,
}

/// @acp:summary "Slices excerpts out of an indexed corpus"
#[derive(Debug, Clone, Copy)]
pub struct ExcerptGenerator<'a> {
    index: &'a CorpusIndex,
}

impl Default for ExcerptGenerator<'static> {
    fn default() -> Self {
        Self::new(CorpusIndex::builtin())
    }
}

impl<'a> ExcerptGenerator<'a> {
    pub fn new(index: &'a CorpusIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a CorpusIndex {
        self.index
    }

    /// @acp:summary "Generate excerpt text using the thread-local random source"
    pub fn generate(&self, request: ExcerptRequest) -> String {
        self.generate_with_rng(request, &mut rand::rng()).text
    }

    /// @acp:summary "Generate an excerpt for a menu tag; unknown tags yield an empty string"
    pub fn generate_tag(&self, tag: &str, randomize: bool) -> String {
        match ExcerptRequest::from_tag(tag, randomize) {
            Some(request) => self.generate(request),
            None => {
                tracing::debug!("Ignoring unknown excerpt tag: {}", tag);
                String::new()
            }
        }
    }

    /// @acp:summary "Generate an excerpt drawing the random start from `rng`"
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: ExcerptRequest,
        rng: &mut R,
    ) -> Excerpt {
        let total = self.unit_count(request.unit);
        // A corpus of blank paragraphs has no sentences to draw from
        let start = if request.randomize && total > 0 {
            rng.random_range(0..total)
        } else {
            0
        };
        self.excerpt_at(request.unit, request.count, start)
    }

    /// @acp:summary "Deterministic slice of `count` units starting at `start`, wrapping around the corpus"
    pub fn excerpt_at(&self, unit: ExcerptUnit, count: usize, start: usize) -> Excerpt {
        let (units, separator) = match unit {
            ExcerptUnit::Sentence => (self.index.sentences(), SENTENCE_SEPARATOR),
            ExcerptUnit::Paragraph => (self.index.paragraphs(), PARAGRAPH_SEPARATOR),
        };

        let text = take_wrapping(units, start, count).join(separator);

        Excerpt { text, unit, start }
    }

    /// Number of units a random start is drawn from
    pub fn unit_count(&self, unit: ExcerptUnit) -> usize {
        match unit {
            ExcerptUnit::Sentence => self.index.sentences().len(),
            ExcerptUnit::Paragraph => self.index.paragraphs().len(),
        }
    }
}

fn take_wrapping(units: &[String], start: usize, count: usize) -> Vec<&str> {
    if units.is_empty() {
        return Vec::new();
    }
    let len = units.len();
    let start = start % len;
    (0..count)
        .map(|offset| units[(start + offset % len) % len].as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn corpus() -> CorpusIndex {
        CorpusIndex::build(vec![
            "Alpha one. Alpha two.".to_string(),
            "Beta one.".to_string(),
            "Gamma one. Gamma two. Gamma three.".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_kind_tags() {
        for kind in ExcerptKind::all() {
            assert_eq!(kind.tag().parse::<ExcerptKind>().unwrap(), *kind);
        }
        assert!("3-sentences".parse::<ExcerptKind>().is_err());
        assert_eq!(ExcerptKind::TwoParagraphs.label(), "2 Paragraphs");
    }

    #[test]
    fn test_request_from_tag() {
        assert_eq!(
            ExcerptRequest::from_tag("2-sentences", true),
            Some(ExcerptRequest::new(ExcerptUnit::Sentence, 2, true))
        );
        assert_eq!(ExcerptRequest::from_tag("lorem", false), None);
    }

    #[test]
    fn test_sentences_from_start() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        assert_eq!(
            generator.generate(ExcerptKind::OneSentence.request(false)),
            "Alpha one."
        );
        assert_eq!(
            generator.generate(ExcerptKind::TwoSentences.request(false)),
            "Alpha one. Alpha two."
        );
    }

    #[test]
    fn test_paragraphs_from_start() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        assert_eq!(
            generator.generate(ExcerptKind::TwoParagraphs.request(false)),
            "Alpha one. Alpha two.\n\nBeta one."
        );
    }

    #[test]
    fn test_sentence_wraparound() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        let excerpt = generator.excerpt_at(ExcerptUnit::Sentence, 2, 5);
        assert_eq!(excerpt.text, "Gamma three. Alpha one.");
    }

    #[test]
    fn test_paragraph_wraparound() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        let excerpt = generator.excerpt_at(ExcerptUnit::Paragraph, 2, 2);
        assert_eq!(
            excerpt.text,
            "Gamma one. Gamma two. Gamma three.\n\nAlpha one. Alpha two."
        );
    }

    #[test]
    fn test_count_larger_than_corpus_wraps_repeatedly() {
        let index = CorpusIndex::build(vec!["Only.".to_string()]).unwrap();
        let generator = ExcerptGenerator::new(&index);
        assert_eq!(
            generator.excerpt_at(ExcerptUnit::Sentence, 3, 0).text,
            "Only. Only. Only."
        );
    }

    #[test]
    fn test_zero_count_is_empty() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        assert_eq!(generator.excerpt_at(ExcerptUnit::Paragraph, 0, 1).text, "");
    }

    #[test]
    fn test_start_past_end_wraps_without_overflow() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        // usize::MAX % 6 == 3
        assert_eq!(
            generator.excerpt_at(ExcerptUnit::Sentence, 2, usize::MAX).text,
            "Gamma one. Gamma two."
        );
        assert_eq!(
            generator.excerpt_at(ExcerptUnit::Sentence, 2, 11).text,
            "Gamma three. Alpha one."
        );
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        assert_eq!(ExcerptGenerator::default().generate_tag("3-paragraphs", true), "");
        assert_eq!(ExcerptGenerator::default().generate_tag("", false), "");
    }

    #[test]
    fn test_random_start_ranges_per_unit() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let sentence =
                generator.generate_with_rng(ExcerptKind::OneSentence.request(true), &mut rng);
            assert!(sentence.start < 6);
            assert_eq!(sentence.text, index.sentences()[sentence.start]);

            let paragraph =
                generator.generate_with_rng(ExcerptKind::OneParagraph.request(true), &mut rng);
            assert!(paragraph.start < 3);
            assert_eq!(paragraph.text, index.paragraphs()[paragraph.start]);
        }
    }

    #[test]
    fn test_blank_corpus_has_no_sentences() {
        let index = CorpusIndex::build(vec![String::new()]).unwrap();
        let generator = ExcerptGenerator::new(&index);
        let mut rng = StdRng::seed_from_u64(1);
        let excerpt = generator.generate_with_rng(ExcerptKind::TwoSentences.request(true), &mut rng);
        assert_eq!(excerpt.text, "");
    }

    #[test]
    fn test_not_randomized_ignores_rng() {
        let index = corpus();
        let generator = ExcerptGenerator::new(&index);
        let mut rng = StdRng::seed_from_u64(99);
        let excerpt = generator.generate_with_rng(ExcerptKind::TwoParagraphs.request(false), &mut rng);
        assert_eq!(excerpt.start, 0);
    }
}
