// src/text_data.rs
use crate::token_parser::{build_nodes, split_reading};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Vocabulary columns may be SQL NULL; those render as empty text.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Token -> space separated reading segments, one per character.
pub type ReadingMap = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LineBreak,
    Word(String),
    Plain(String),
}

/// One rendered node per input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    LineBreak,
    Plain(String),
    Word(WordNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNode {
    pub original: String,
    pub reading: Option<String>,
    pub unknown: bool,
    pub showing_reading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubyPair {
    pub character: char,
    pub reading: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPartition {
    pub known: Vec<String>,
    pub unknown: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownWordRecord {
    pub word: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pinyin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meaning: String,
}

/// Response of `/next_word`. `word` is null once the deck is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardWord {
    pub word: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pinyin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardRecord {
    pub word: String,
    pub known: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    pub word: String,
    pub probability: f64,
    pub interactions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub total: u64,
    pub stats: Vec<CharacterStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStat {
    pub character: String,
    pub count: u64,
    pub frequency: f64,
}

/// The annotated text of one story, with per-word tag state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDocument {
    pub nodes: Vec<TextNode>,
}

impl WordNode {
    pub fn new(original: String, reading: Option<String>) -> Self {
        Self {
            original,
            reading,
            unknown: false,
            showing_reading: false,
        }
    }

    /// Per-character ruby pairs, or `None` when the word has no reading entry.
    pub fn ruby(&self) -> Option<Vec<RubyPair>> {
        self.reading
            .as_deref()
            .map(|reading| split_reading(&self.original, reading))
    }
}

impl ReviewDocument {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn from_tokens(tokens: &[String], readings: &ReadingMap) -> Self {
        Self {
            nodes: build_nodes(tokens, readings),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    pub fn word(&self, index: usize) -> Option<&WordNode> {
        match self.nodes.get(index) {
            Some(TextNode::Word(word)) => Some(word),
            _ => None,
        }
    }

    fn word_mut(&mut self, index: usize) -> Option<&mut WordNode> {
        match self.nodes.get_mut(index) {
            Some(TextNode::Word(word)) => Some(word),
            _ => None,
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &WordNode> {
        self.nodes.iter().filter_map(|node| match node {
            TextNode::Word(word) => Some(word),
            _ => None,
        })
    }

    /// Flip the known/unknown tag. Returns false for non-word nodes.
    pub fn toggle_unknown(&mut self, index: usize) -> bool {
        match self.word_mut(index) {
            Some(word) => {
                word.unknown = !word.unknown;
                true
            }
            None => false,
        }
    }

    /// Flip the reading overlay. Words without a reading are left alone.
    pub fn toggle_reading(&mut self, index: usize) -> bool {
        let showing = match self.word(index) {
            Some(word) if word.reading.is_some() => word.showing_reading,
            _ => return false,
        };
        self.set_reading(index, !showing)
    }

    pub fn set_reading(&mut self, index: usize, show: bool) -> bool {
        match self.word_mut(index) {
            Some(word) if word.reading.is_some() => {
                if word.showing_reading == show {
                    return false;
                }
                word.showing_reading = show;
                true
            }
            _ => false,
        }
    }

    /// Ruby pairs for a word currently showing its overlay.
    pub fn overlay(&self, index: usize) -> Option<Vec<RubyPair>> {
        self.word(index)
            .filter(|word| word.showing_reading)
            .and_then(WordNode::ruby)
    }

    /// Split word nodes by tag, keeping document order.
    pub fn partition(&self) -> WordPartition {
        let mut partition = WordPartition::default();
        for word in self.words() {
            if word.unknown {
                partition.unknown.push(word.original.clone());
            } else {
                partition.known.push(word.original.clone());
            }
        }
        partition
    }
}

impl WordPartition {
    pub fn summary(&self, separator: &str) -> String {
        format!(
            "Known: {}\n\nUnknown: {}",
            self.known.join(separator),
            self.unknown.join(separator)
        )
    }
}

impl FlashcardWord {
    pub fn is_exhausted(&self) -> bool {
        self.word.as_deref().map_or(true, str::is_empty)
    }
}

impl WordStat {
    pub fn probability_label(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}

impl CharacterStat {
    pub fn frequency_label(&self) -> String {
        format!("{:.2}%", self.frequency)
    }
}

impl CharacterStats {
    pub fn unique(&self) -> usize {
        self.stats.len()
    }
}
