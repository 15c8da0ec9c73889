// src/utils.rs
use gloo_utils::window;

/// Pages served by this bundle, selected from the location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    TextReview,
    Flashcards,
    Database,
    WordStats,
    CharacterStats,
}

const BASE_PATH: &str = "/hanzi-review";

/// Get the base path the application is mounted under
pub fn get_base_url() -> String {
    match window().location().pathname() {
        Ok(path) if path.starts_with(&format!("{}/", BASE_PATH)) => BASE_PATH.to_string(),
        _ => String::new(),
    }
}

/// Build a resource URL with the correct base path
pub fn resource_url(path: &str) -> String {
    join_url(&get_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let clean_path = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}/{}", base, clean_path)
    }
}

pub fn current_route() -> Route {
    let path = window().location().pathname().unwrap_or_default();
    route_for_path(&path)
}

pub fn route_for_path(path: &str) -> Route {
    let path = path.strip_prefix(BASE_PATH).unwrap_or(path);
    let page = path
        .trim_matches('/')
        .trim_end_matches(".html")
        .rsplit('/')
        .next()
        .unwrap_or_default();
    match page {
        "flashcards" | "flashcard" => Route::Flashcards,
        "database" => Route::Database,
        "stats" => Route::WordStats,
        "characters" => Route::CharacterStats,
        _ => Route::TextReview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "/tokens.json"), "/tokens.json");
        assert_eq!(join_url("", "tokens.json"), "/tokens.json");
        assert_eq!(
            join_url("/hanzi-review", "stories_list"),
            "/hanzi-review/stories_list"
        );
    }

    #[test]
    fn test_routes() {
        assert_eq!(route_for_path("/"), Route::TextReview);
        assert_eq!(route_for_path("/text"), Route::TextReview);
        assert_eq!(route_for_path("/flashcards"), Route::Flashcards);
        assert_eq!(route_for_path("/flashcard.html"), Route::Flashcards);
        assert_eq!(route_for_path("/database"), Route::Database);
        assert_eq!(route_for_path("/stats"), Route::WordStats);
        assert_eq!(route_for_path("/hanzi-review/characters/"), Route::CharacterStats);
    }
}
