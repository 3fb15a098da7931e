use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::generator::PassageSource;

pub const PASSAGES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog. This pangram contains every letter of the English alphabet at least once. Pangrams are often used to test fonts, keyboards, and other text-related tools.",
    "Programming is the process of creating a set of instructions that tell a computer how to perform a task. Programming can be done using a variety of computer programming languages, such as JavaScript, Python, and C++.",
    "The Internet is a global network of interconnected computers that communicate through a standardized set of protocols. It has revolutionized the way people communicate, work, and access information worldwide.",
    "Artificial intelligence is the simulation of human intelligence processes by machines, especially computer systems. These processes include learning, reasoning, and self-correction. AI is being applied in various fields including healthcare, finance, and transportation.",
    "Typing speed is typically measured in words per minute (WPM). The average typing speed is around 40 WPM, while professional typists can reach speeds of 65 to 75 WPM. The world record for typing speed is over 200 WPM.",
    "Cloud computing is the delivery of computing services, including servers, storage, databases, networking, software, analytics, and intelligence, over the Internet (\"the cloud\") to offer faster innovation, flexible resources, and economies of scale.",
    "Cybersecurity is the practice of protecting systems, networks, and programs from digital attacks. These cyberattacks are usually aimed at accessing, changing, or destroying sensitive information; extorting money from users; or interrupting normal business processes.",
    "Machine learning is a method of data analysis that automates analytical model building. It is a branch of artificial intelligence based on the idea that systems can learn from data, identify patterns and make decisions with minimal human intervention.",
    "The World Wide Web, commonly known as the Web, is an information system where documents and other web resources are identified by Uniform Resource Locators, which may be interlinked by hypertext, and are accessible over the Internet.",
    "Responsive web design is an approach to web design that makes web pages render well on a variety of devices and window or screen sizes. Recent work also considers the viewer proximity as part of the viewing context as an extension for RWD.",
];

/// Picks passages uniformly at random from the built-in pool.
pub struct PassageGenerator<R: Rng = SmallRng> {
    rng: R,
}

impl PassageGenerator<SmallRng> {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }
}

impl Default for PassageGenerator<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PassageGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PassageSource for PassageGenerator<R> {
    fn next_passage(&mut self) -> String {
        let idx = self.rng.gen_range(0..PASSAGES.len());
        PASSAGES[idx].to_string()
    }
}

/// Hands out a fixed list of passages in order, wrapping around.
/// Used where a deterministic target text is needed.
#[derive(Clone, Debug)]
pub struct FixedPassage {
    passages: Vec<String>,
    next_idx: usize,
}

impl FixedPassage {
    pub fn new(text: &str) -> Self {
        Self::cycle(&[text])
    }

    pub fn cycle(texts: &[&str]) -> Self {
        let passages = if texts.is_empty() {
            vec![PASSAGES[0].to_string()]
        } else {
            texts.iter().map(|t| t.to_string()).collect()
        };
        Self {
            passages,
            next_idx: 0,
        }
    }
}

impl PassageSource for FixedPassage {
    fn next_passage(&mut self) -> String {
        let text = self.passages[self.next_idx % self.passages.len()].clone();
        self.next_idx += 1;
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_is_printable_ascii() {
        assert!(!PASSAGES.is_empty());
        for passage in PASSAGES {
            assert!(!passage.is_empty());
            assert!(
                passage.chars().all(|c| c.is_ascii_graphic() || c == ' '),
                "non-typeable character in {passage:?}"
            );
        }
    }

    #[test]
    fn test_generator_draws_from_pool() {
        let mut generator = PassageGenerator::with_rng(SmallRng::seed_from_u64(7));
        for _ in 0..50 {
            let text = generator.next_passage();
            assert!(PASSAGES.contains(&text.as_str()));
        }
    }

    #[test]
    fn test_generator_reaches_more_than_one_passage() {
        let mut generator = PassageGenerator::with_rng(SmallRng::seed_from_u64(42));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generator.next_passage());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_fixed_passage_cycles() {
        let mut source = FixedPassage::cycle(&["one", "two"]);
        assert_eq!(source.next_passage(), "one");
        assert_eq!(source.next_passage(), "two");
        assert_eq!(source.next_passage(), "one");
    }

    #[test]
    fn test_fixed_passage_empty_list_falls_back_to_pool() {
        let mut source = FixedPassage::cycle(&[]);
        assert_eq!(source.next_passage(), PASSAGES[0]);
    }
}
