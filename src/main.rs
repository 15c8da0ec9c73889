// src/main.rs
mod api;
mod components;
mod flashcard;
mod pager;
mod table;
mod text_data;
mod token_parser;
mod utils;
mod widget_config;

use components::flashcard_reviewer::FlashcardReviewer;
use components::schema_browser::SchemaBrowser;
use components::stats_viewer::{CharacterStatsViewer, WordStatsViewer};
use components::text_review::TextReview;
use utils::Route;
use widget_config::WidgetConfig;
use yew::prelude::*;

pub enum AppMsg {
    ConfigLoaded(WidgetConfig),
}

pub struct App {
    route: Route,
    config: Option<WidgetConfig>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let route = utils::current_route();

        if route == Route::TextReview {
            ctx.link().send_future(async {
                match api::load_config().await {
                    Ok(config) => {
                        log::info!("Loaded widget config: {:?}", config);
                        AppMsg::ConfigLoaded(config)
                    }
                    Err(e) => {
                        log::warn!("Using default widget config: {}", e);
                        AppMsg::ConfigLoaded(WidgetConfig::default())
                    }
                }
            });
        }

        Self {
            route,
            config: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ConfigLoaded(config) => {
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (title, body) = match self.route {
            Route::TextReview => (
                "Text review",
                match &self.config {
                    Some(config) => html! { <TextReview config={config.clone()} /> },
                    None => html! { <div class="loading">{"Loading..."}</div> },
                },
            ),
            Route::Flashcards => ("Flashcards", html! { <FlashcardReviewer /> }),
            Route::Database => ("Database", html! { <SchemaBrowser /> }),
            Route::WordStats => ("Word statistics", html! { <WordStatsViewer /> }),
            Route::CharacterStats => ("Character statistics", html! { <CharacterStatsViewer /> }),
        };

        html! {
            <div class="app-container">
                <header class="app-header">
                    <h1>{ title }</h1>
                </header>
                <main class="app-main">
                    { body }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
