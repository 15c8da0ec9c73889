// src/token_parser.rs
//
// Classification of raw token strings and alignment of reading segments.

use crate::text_data::{ReadingMap, RubyPair, TextNode, Token, WordNode};

const CJK_UNIFIED_START: char = '\u{4e00}';
const CJK_UNIFIED_END: char = '\u{9fff}';

/// True if any character of `text` falls in the CJK Unified Ideographs block.
pub fn is_chinese_script(text: &str) -> bool {
    text.chars()
        .any(|c| (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&c))
}

pub fn classify(raw: &str) -> Token {
    if raw == "\n" {
        Token::LineBreak
    } else if is_chinese_script(raw) {
        Token::Word(raw.to_string())
    } else {
        Token::Plain(raw.to_string())
    }
}

/// Pair each character of `word` with the segment at the same position.
/// Missing segments become empty readings; extra segments are dropped.
pub fn split_reading(word: &str, reading: &str) -> Vec<RubyPair> {
    let mut segments = reading.split(' ');
    word.chars()
        .map(|character| RubyPair {
            character,
            reading: segments.next().unwrap_or_default().to_string(),
        })
        .collect()
}

pub fn build_nodes(tokens: &[String], readings: &ReadingMap) -> Vec<TextNode> {
    tokens
        .iter()
        .map(|raw| match classify(raw) {
            Token::LineBreak => TextNode::LineBreak,
            Token::Plain(text) => TextNode::Plain(text),
            Token::Word(text) => {
                let reading = readings
                    .get(&text)
                    .filter(|reading| !reading.is_empty())
                    .cloned();
                TextNode::Word(WordNode::new(text, reading))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_script_detection() {
        assert!(is_chinese_script("你"));
        assert!(is_chinese_script("a中b"));
        assert!(is_chinese_script("\u{4e00}"));
        assert!(is_chinese_script("\u{9fff}"));
        assert!(!is_chinese_script("\u{3400}"));
        assert!(!is_chinese_script("，"));
        assert!(!is_chinese_script("hello"));
        assert!(!is_chinese_script(""));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("\n"), Token::LineBreak);
        assert_eq!(classify("学生"), Token::Word("学生".to_string()));
        assert_eq!(classify(" "), Token::Plain(" ".to_string()));
        assert_eq!(classify("\n\n"), Token::Plain("\n\n".to_string()));
    }

    #[test]
    fn test_split_reading_aligned() {
        let pairs = split_reading("学生", "xué shēng");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].character, '学');
        assert_eq!(pairs[0].reading, "xué");
        assert_eq!(pairs[1].character, '生');
        assert_eq!(pairs[1].reading, "shēng");
    }

    #[test]
    fn test_split_reading_missing_segments_are_empty() {
        let pairs = split_reading("图书馆", "tú");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].reading, "tú");
        assert_eq!(pairs[1].reading, "");
        assert_eq!(pairs[2].reading, "");
    }

    #[test]
    fn test_split_reading_extra_segments_dropped() {
        let pairs = split_reading("好", "hǎo ma");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].reading, "hǎo");
    }

    #[test]
    fn test_build_nodes_attaches_readings() {
        let tokens = vec!["你".to_string(), "。".to_string(), "我".to_string()];
        let mut readings = ReadingMap::new();
        readings.insert("你".to_string(), "ㄋㄧˇ".to_string());
        let nodes = build_nodes(&tokens, &readings);

        assert_eq!(nodes.len(), 3);
        match &nodes[0] {
            TextNode::Word(word) => assert_eq!(word.reading.as_deref(), Some("ㄋㄧˇ")),
            other => panic!("expected word, got {:?}", other),
        }
        assert_eq!(nodes[1], TextNode::Plain("。".to_string()));
        match &nodes[2] {
            TextNode::Word(word) => assert!(word.reading.is_none()),
            other => panic!("expected word, got {:?}", other),
        }
    }
}
