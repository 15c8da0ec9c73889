// src/widget_config.rs
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// How a word's reading overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealTrigger {
    /// Secondary click toggles the overlay; primary click toggles the tag.
    Click,
    /// Overlay follows the pointer.
    Hover,
    /// Primary click toggles both the tag and the overlay.
    Combined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pagination {
    SingleDocument,
    MultiStory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub reveal_trigger: RevealTrigger,
    pub submission: bool,
    pub pagination: Pagination,
    pub summary_separator: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            reveal_trigger: RevealTrigger::Combined,
            submission: true,
            pagination: Pagination::SingleDocument,
            summary_separator: String::new(),
        }
    }
}

impl WidgetConfig {
    pub fn with_reveal_trigger(mut self, trigger: RevealTrigger) -> Self {
        self.reveal_trigger = trigger;
        self
    }

    pub fn with_submission(mut self, enabled: bool) -> Self {
        self.submission = enabled;
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.summary_separator = separator.to_string();
        self
    }

    pub fn is_multi_story(&self) -> bool {
        self.pagination == Pagination::MultiStory
    }

    pub fn tokens_path(&self, story: Option<&str>) -> String {
        match story {
            Some(story) => format!("story_tokens/{}", encode_segment(story)),
            None => "tokens.json".to_string(),
        }
    }

    pub fn readings_path(&self, story: Option<&str>) -> String {
        match story {
            Some(story) => format!("bopomofo_mapping/{}", encode_segment(story)),
            None => "bopomofo_mapping".to_string(),
        }
    }

    pub fn unknown_words_path(&self, story: Option<&str>) -> String {
        match story {
            Some(story) => format!("unknown_words/{}", encode_segment(story)),
            None => "unknown_words".to_string(),
        }
    }

    pub fn audio_path(story: &str) -> String {
        format!("audio/{}.wav", encode_segment(story))
    }
}

/// Everything but unreserved characters is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a story name for use as a single path segment.
fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.reveal_trigger, RevealTrigger::Combined);
        assert!(config.submission);
        assert!(!config.is_multi_story());
        assert_eq!(config.summary_separator, "");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"reveal_trigger":"hover","pagination":"multi_story"}"#)
                .unwrap();
        assert_eq!(config.reveal_trigger, RevealTrigger::Hover);
        assert!(config.is_multi_story());
        assert!(config.submission);
    }

    #[test]
    fn test_builder() {
        let config = WidgetConfig::default()
            .with_reveal_trigger(RevealTrigger::Click)
            .with_submission(false)
            .with_separator(" ");
        assert_eq!(config.reveal_trigger, RevealTrigger::Click);
        assert!(!config.submission);
        assert_eq!(config.summary_separator, " ");
    }

    #[test]
    fn test_paths() {
        let config = WidgetConfig::default();
        assert_eq!(config.tokens_path(None), "tokens.json");
        assert_eq!(config.readings_path(None), "bopomofo_mapping");
        assert_eq!(config.unknown_words_path(None), "unknown_words");
        assert_eq!(config.tokens_path(Some("lesson_1")), "story_tokens/lesson_1");
        assert_eq!(
            config.readings_path(Some("lesson 2")),
            "bopomofo_mapping/lesson%202"
        );
        assert_eq!(WidgetConfig::audio_path("lesson_1"), "audio/lesson_1.wav");
    }

    #[test]
    fn test_story_names_are_single_segments() {
        let config = WidgetConfig::default();
        assert_eq!(
            config.tokens_path(Some("第一课/a?b")),
            "story_tokens/%E7%AC%AC%E4%B8%80%E8%AF%BE%2Fa%3Fb"
        );
        assert_eq!(
            config.unknown_words_path(Some("ch-1.v2~x")),
            "unknown_words/ch-1.v2~x"
        );
        assert_eq!(WidgetConfig::audio_path("a b"), "audio/a%20b.wav");
    }
}
