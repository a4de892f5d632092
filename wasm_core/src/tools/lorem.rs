//! Seeded lorem-ipsum generator.
//!
//! A 32-bit linear congruential generator drives every draw, so the same
//! seed and options always produce byte-identical paragraphs.

use crate::config::Bounds;
use crate::random::{now_millis, random_u32};

pub const WORDS: &[&str] = &[
    "adipiscing", "aliqua", "aliquet", "amet", "ante", "arcu", "aute", "commodo", "condimentum",
    "consectetur", "consequat", "culpa", "cupidatat", "dapibus", "deserunt", "diam", "dictum",
    "dignissim", "do", "dolor", "duis", "egestas", "eiusmod", "elit", "enim", "erat", "eros",
    "est", "et", "eu", "ex", "excepteur", "exercitation", "felis", "fermentum", "fusce",
    "gravida", "iaculis", "imperdiet", "incididunt", "ipsum", "justo", "laboris", "laborum",
    "lacus", "lectus", "ligula", "litora", "lobortis", "lorem", "malesuada", "massa", "mauris",
    "metus", "mollis", "nec", "nibh", "nisi", "non", "nostrud", "nulla", "nullam", "occaecat",
    "odio", "orci", "pariatur", "penatibus", "placerat", "porta", "posuere", "proident",
    "pulvinar", "quam", "qui", "quis", "rhoncus", "risus", "sagittis", "sapien", "scelerisque",
    "sed", "sem", "semper", "senectus", "sint", "sit", "sociis", "sollicitudin", "sunt",
    "tellus", "tempor", "tincidunt", "tortor", "tristique", "ullamco", "urna", "ut", "varius",
    "vehicula", "velit", "venenatis", "vitae", "volutpat",
];

pub const CLASSIC_OPENING: [&str; 5] = ["Lorem", "ipsum", "dolor", "sit", "amet"];

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

const MIN_SENTENCE_WORDS: usize = 8;
const SENTENCE_WORD_SPREAD: usize = 8;

/// `seed = seed * 1664525 + 1013904223 (mod 2^32)`, emitted as `seed / 2^32`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next draw in `[0, 1)`.
    pub fn next_fraction(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.state) / TWO_POW_32
    }

    /// Uniform pick in `0..len`.
    pub fn pick(&mut self, len: usize) -> usize {
        (self.next_fraction() * len as f64) as usize
    }
}

/// Fresh seed from the CSPRNG, or the wall clock when that is missing.
pub fn generate_seed() -> u32 {
    match random_u32() {
        Ok(seed) if seed != 0 => seed,
        _ => {
            log::debug!("falling back to a clock-derived lorem seed");
            now_millis() as u32
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoremOptions {
    pub paragraphs: u32,
    pub sentences_per_paragraph: u32,
    pub start_with_classic: bool,
    pub seed: u32,
}

impl LoremOptions {
    /// Clamps the counts into the configured bounds.
    pub fn clamped(self, paragraphs: &Bounds, sentences: &Bounds) -> Self {
        Self {
            paragraphs: paragraphs.clamp(self.paragraphs),
            sentences_per_paragraph: sentences.clamp(self.sentences_per_paragraph),
            ..self
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn build_sentence(rng: &mut Lcg, classic_opening: bool) -> String {
    let length = MIN_SENTENCE_WORDS + rng.pick(SENTENCE_WORD_SPREAD);
    let mut words: Vec<String> = (0..length)
        .map(|_| WORDS[rng.pick(WORDS.len())].to_string())
        .collect();
    if classic_opening {
        // The drawn words stay consumed so the stream after this sentence is unchanged.
        for (slot, word) in words.iter_mut().zip(CLASSIC_OPENING) {
            *slot = word.to_string();
        }
    } else {
        words[0] = capitalize(&words[0]);
    }
    format!("{}.", words.join(" "))
}

/// One string per paragraph; sentences inside a paragraph are joined by a space.
pub fn generate_lorem(options: &LoremOptions) -> Vec<String> {
    let mut rng = Lcg::new(options.seed);
    (0..options.paragraphs)
        .map(|paragraph| {
            (0..options.sentences_per_paragraph)
                .map(|sentence| {
                    let classic = options.start_with_classic && paragraph == 0 && sentence == 0;
                    build_sentence(&mut rng, classic)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Paragraphs separated by a blank line, as placed on the clipboard.
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join("\n\n")
}

pub fn describe(paragraphs: u32, sentences: u32) -> String {
    let plural = |count: u32| if count == 1 { "" } else { "s" };
    format!(
        "Generate {paragraphs} paragraph{} with {sentences} sentence{} each.",
        plural(paragraphs),
        plural(sentences)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(seed: u32, paragraphs: u32, sentences: u32, classic: bool) -> LoremOptions {
        LoremOptions {
            paragraphs,
            sentences_per_paragraph: sentences,
            start_with_classic: classic,
            seed,
        }
    }

    #[test]
    fn word_list_is_fixed() {
        assert_eq!(WORDS.len(), 103);
        assert!(WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn lcg_matches_reference_recurrence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_fraction(), 1_013_904_223.0 / TWO_POW_32);
        let mut rng = Lcg::new(u32::MAX);
        let expected = (u64::from(u32::MAX) * 1_664_525 + 1_013_904_223) % (1 << 32);
        assert_eq!(rng.next_fraction(), expected as f64 / TWO_POW_32);
    }

    #[test]
    fn known_seed_produces_known_text() {
        assert_eq!(
            generate_lorem(&options(42, 1, 1, false)),
            vec!["Consectetur nostrud eiusmod imperdiet aliquet ligula cupidatat tempor volutpat sollicitudin."]
        );
        assert_eq!(
            generate_lorem(&options(42, 1, 1, true)),
            vec!["Lorem ipsum dolor sit amet ligula cupidatat tempor volutpat sollicitudin."]
        );
    }

    #[test]
    fn same_inputs_are_byte_identical() {
        let first = generate_lorem(&options(7, 4, 6, true));
        let second = generate_lorem(&options(7, 4, 6, true));
        assert_eq!(first, second);
    }

    #[test]
    fn different_seed_changes_output() {
        assert_ne!(
            generate_lorem(&options(1, 3, 4, false)),
            generate_lorem(&options(2, 3, 4, false))
        );
    }

    #[test]
    fn classic_opening_keeps_sentence_length() {
        let plain = generate_lorem(&options(99, 1, 1, false));
        let classic = generate_lorem(&options(99, 1, 1, true));
        assert!(classic[0].starts_with("Lorem ipsum dolor sit amet"));
        assert_eq!(
            plain[0].split(' ').count(),
            classic[0].split(' ').count()
        );
    }

    #[test]
    fn classic_opening_only_touches_first_sentence() {
        let plain = generate_lorem(&options(5, 2, 3, false));
        let classic = generate_lorem(&options(5, 2, 3, true));
        assert_eq!(plain[1], classic[1]);
        let tail = |text: &str| text.split(". ").skip(1).collect::<Vec<_>>().join(". ");
        assert_eq!(tail(&plain[0]), tail(&classic[0]));
    }

    #[test]
    fn shape_follows_counts() {
        let paragraphs = generate_lorem(&options(1234, 3, 5, false));
        assert_eq!(paragraphs.len(), 3);
        for paragraph in &paragraphs {
            let sentences: Vec<&str> = paragraph.split_inclusive(". ").collect();
            assert_eq!(sentences.len(), 5, "{paragraph}");
            for sentence in sentences {
                let words = sentence.trim_end().trim_end_matches('.').split(' ').count();
                assert!((8..=15).contains(&words), "{sentence}");
                assert!(sentence.starts_with(|c: char| c.is_ascii_uppercase()));
            }
            assert!(paragraph.ends_with('.'));
        }
    }

    #[test]
    fn longer_request_extends_the_same_stream() {
        let short = generate_lorem(&options(31337, 2, 4, true));
        let long = generate_lorem(&options(31337, 3, 4, true));
        assert_eq!(&long[..2], &short[..]);
    }

    #[test]
    fn counts_are_clamped() {
        let clamped = options(1, 0, 50, false)
            .clamped(&Bounds::new(1, 10, 3), &Bounds::new(1, 12, 4));
        assert_eq!(clamped.paragraphs, 1);
        assert_eq!(clamped.sentences_per_paragraph, 12);
    }

    #[test]
    fn seed_is_never_zero() {
        assert_ne!(generate_seed(), 0);
    }

    #[test]
    fn description_pluralizes() {
        assert_eq!(describe(1, 1), "Generate 1 paragraph with 1 sentence each.");
        assert_eq!(describe(3, 4), "Generate 3 paragraphs with 4 sentences each.");
    }

    #[test]
    fn paragraphs_join_with_blank_line() {
        let text = join_paragraphs(&["a.".into(), "b.".into()]);
        assert_eq!(text, "a.\n\nb.");
    }
}
