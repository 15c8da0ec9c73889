// src/api.rs
//
// Thin wrappers over the backend endpoints. Every helper resolves its path
// through `resource_url` and reports failures as a `String`.

use crate::table::{parse_schema, TableSchema};
use crate::text_data::{
    CharacterStats, FlashcardRecord, FlashcardWord, ReadingMap, UnknownWordRecord, WordPartition,
    WordStat,
};
use crate::utils::resource_url;
use crate::widget_config::WidgetConfig;
use gloo_net::http::{Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = resource_url(path);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {:?}", url, e))?;
    if !resp.ok() {
        return Err(format!("{} returned status {}", url, resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| format!("Failed to parse {}: {:?}", url, e))
}

async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<(), String> {
    let url = resource_url(path);
    let resp = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to encode body for {}: {:?}", url, e))?
        .send()
        .await
        .map_err(|e| format!("Failed to post {}: {:?}", url, e))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("{} returned status {}", url, resp.status()))
    }
}

pub async fn load_config() -> Result<WidgetConfig, String> {
    get_json("widget.json").await
}

pub async fn fetch_tokens(config: &WidgetConfig, story: Option<&str>) -> Result<Vec<String>, String> {
    get_json(&config.tokens_path(story)).await
}

pub async fn fetch_readings(config: &WidgetConfig, story: Option<&str>) -> Result<ReadingMap, String> {
    get_json(&config.readings_path(story)).await
}

pub async fn fetch_unknown_words(
    config: &WidgetConfig,
    story: Option<&str>,
) -> Result<Vec<UnknownWordRecord>, String> {
    get_json(&config.unknown_words_path(story)).await
}

pub async fn fetch_stories() -> Result<Vec<String>, String> {
    get_json("stories_list").await
}

/// HEAD request for the story's audio file. Any failure counts as absent.
pub async fn audio_exists(story: &str) -> Option<String> {
    let url = resource_url(&WidgetConfig::audio_path(story));
    match RequestBuilder::new(&url).method(Method::HEAD).send().await {
        Ok(resp) if resp.ok() => Some(url),
        Ok(resp) => {
            log::warn!("No audio for story {} (status {})", story, resp.status());
            None
        }
        Err(e) => {
            log::warn!("Audio check for {} failed: {:?}", story, e);
            None
        }
    }
}

pub async fn submit_words(partition: &WordPartition) -> Result<(), String> {
    post_json("update_words", partition).await
}

pub async fn fetch_next_word(offset: u32) -> Result<FlashcardWord, String> {
    get_json(&format!("next_word?offset={}", offset)).await
}

pub async fn record_flashcard(record: &FlashcardRecord) -> Result<(), String> {
    post_json("record_flashcard", record).await
}

pub async fn fetch_schema() -> Result<Vec<TableSchema>, String> {
    let data: Map<String, Value> = get_json("db_schema").await?;
    parse_schema(data)
}

pub async fn fetch_table(name: &str) -> Result<Vec<Map<String, Value>>, String> {
    get_json(&format!("table/{}", name)).await
}

pub async fn fetch_word_stats() -> Result<Vec<WordStat>, String> {
    get_json("stats_data").await
}

pub async fn fetch_character_stats() -> Result<CharacterStats, String> {
    get_json("stats.json").await
}
