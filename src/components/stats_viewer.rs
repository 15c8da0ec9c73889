// src/components/stats_viewer.rs
use crate::api;
use crate::text_data::{CharacterStats, WordStat};
use yew::prelude::*;

pub enum WordStatsMsg {
    Loaded(Result<Vec<WordStat>, String>),
}

/// Per-word knowledge probability and interaction counts.
pub struct WordStatsViewer {
    entries: Vec<WordStat>,
}

impl Component for WordStatsViewer {
    type Message = WordStatsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { WordStatsMsg::Loaded(api::fetch_word_stats().await) });
        Self {
            entries: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WordStatsMsg::Loaded(Ok(entries)) => {
                self.entries = entries;
                true
            }
            WordStatsMsg::Loaded(Err(e)) => {
                log::error!("Failed to load stats: {}", e);
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <table id="stats" class="stats-table">
                <thead>
                    <tr><th>{"Word"}</th><th>{"Known"}</th><th>{"Interactions"}</th></tr>
                </thead>
                <tbody>
                    { for self.entries.iter().map(|entry| html! {
                        <tr>
                            <td>{ entry.word.clone() }</td>
                            <td>{ entry.probability_label() }</td>
                            <td>{ entry.interactions.to_string() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    }
}

pub enum CharacterStatsMsg {
    Loaded(Result<CharacterStats, String>),
}

/// Character frequency table built from the static `stats.json`.
pub struct CharacterStatsViewer {
    stats: Option<CharacterStats>,
}

impl Component for CharacterStatsViewer {
    type Message = CharacterStatsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            CharacterStatsMsg::Loaded(api::fetch_character_stats().await)
        });
        Self { stats: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CharacterStatsMsg::Loaded(Ok(stats)) => {
                self.stats = Some(stats);
                true
            }
            CharacterStatsMsg::Loaded(Err(e)) => {
                log::error!("Failed to load stats: {}", e);
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (total, unique) = self
            .stats
            .as_ref()
            .map(|s| (s.total.to_string(), s.unique().to_string()))
            .unwrap_or_default();

        html! {
            <div class="character-stats">
                <p>{"Total characters: "}<span id="total">{ total }</span></p>
                <p>{"Unique characters: "}<span id="unique">{ unique }</span></p>
                <table id="stats" class="stats-table">
                    <thead>
                        <tr><th>{"Character"}</th><th>{"Count"}</th><th>{"Frequency"}</th></tr>
                    </thead>
                    <tbody>
                        { for self.stats.iter().flat_map(|s| s.stats.iter()).map(|item| html! {
                            <tr>
                                <td>{ item.character.clone() }</td>
                                <td>{ item.count.to_string() }</td>
                                <td>{ item.frequency_label() }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    }
}
