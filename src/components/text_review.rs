// src/components/text_review.rs
use crate::api;
use crate::pager::{StoryPager, StoryTicket};
use crate::text_data::*;
use crate::widget_config::{RevealTrigger, WidgetConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextReviewProps {
    pub config: WidgetConfig,
}

pub enum TextReviewMsg {
    LoadStories,
    StoriesLoaded(Result<Vec<String>, String>),
    LoadStory(isize),
    PreviousStory,
    NextStory,
    TokensLoaded(StoryTicket, Result<Vec<String>, String>),
    ReadingsLoaded(StoryTicket, ReadingMap),
    LoadUnknownWords(StoryTicket),
    UnknownWordsLoaded(StoryTicket, Result<Vec<UnknownWordRecord>, String>),
    CheckAudio(StoryTicket),
    AudioChecked(StoryTicket, Option<String>),
    ClickWord(usize),
    ToggleReading(usize),
    HoverWord(usize, bool),
    ShowResults,
    Submitted(Result<(), String>),
}

pub struct TextReview {
    config: WidgetConfig,
    pager: StoryPager,
    ticket: Option<StoryTicket>,
    pending_tokens: Option<Vec<String>>,
    pending_readings: Option<ReadingMap>,
    document: ReviewDocument,
    unknown_words: Vec<UnknownWordRecord>,
    audio_url: Option<String>,
    summary: Option<String>,
    loading: bool,
}

impl Component for TextReview {
    type Message = TextReviewMsg;
    type Properties = TextReviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut review = Self {
            config: ctx.props().config.clone(),
            pager: StoryPager::new(),
            ticket: None,
            pending_tokens: None,
            pending_readings: None,
            document: ReviewDocument::new(),
            unknown_words: Vec::new(),
            audio_url: None,
            summary: None,
            loading: true,
        };
        review.start(ctx);
        review
    }

    fn changed(&mut self, ctx: &Context<Self>, _old: &Self::Properties) -> bool {
        if ctx.props().config == self.config {
            return false;
        }
        self.config = ctx.props().config.clone();
        self.pager.reset();
        self.start(ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TextReviewMsg::LoadStories => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::fetch_stories().await;
                    link.send_message(TextReviewMsg::StoriesLoaded(result));
                });
                false
            }
            TextReviewMsg::StoriesLoaded(res) => {
                match res {
                    Ok(stories) => {
                        log::info!("Loaded {} stories", stories.len());
                        self.pager.set_stories(stories);
                        if self.pager.is_empty() {
                            log::warn!("Story list is empty");
                            self.loading = false;
                        } else {
                            ctx.link().send_message(TextReviewMsg::LoadStory(0));
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to load story list: {}", e);
                        self.loading = false;
                    }
                }
                true
            }
            TextReviewMsg::LoadStory(index) => match self.pager.load_story(index) {
                Some(ticket) => {
                    self.begin_load(ctx, ticket);
                    true
                }
                None => false,
            },
            TextReviewMsg::PreviousStory => match self.pager.previous() {
                Some(ticket) => {
                    self.begin_load(ctx, ticket);
                    true
                }
                None => false,
            },
            TextReviewMsg::NextStory => match self.pager.next() {
                Some(ticket) => {
                    self.begin_load(ctx, ticket);
                    true
                }
                None => false,
            },
            TextReviewMsg::TokensLoaded(ticket, res) => {
                if !self.pager.is_current(&ticket) {
                    log::debug!("Dropping stale tokens for {:?}", ticket.story);
                    return false;
                }
                match res {
                    Ok(tokens) => {
                        self.pending_tokens = Some(tokens);
                        self.try_render(ctx);
                    }
                    Err(e) => {
                        log::error!("Failed to load tokens: {}", e);
                        self.document.clear();
                        self.pending_readings = None;
                        self.loading = false;
                    }
                }
                true
            }
            TextReviewMsg::ReadingsLoaded(ticket, readings) => {
                if !self.pager.is_current(&ticket) {
                    return false;
                }
                self.pending_readings = Some(readings);
                self.try_render(ctx);
                true
            }
            TextReviewMsg::LoadUnknownWords(ticket) => {
                let link = ctx.link().clone();
                let config = self.config.clone();
                spawn_local(async move {
                    let result = api::fetch_unknown_words(&config, ticket.story.as_deref()).await;
                    link.send_message(TextReviewMsg::UnknownWordsLoaded(ticket, result));
                });
                false
            }
            TextReviewMsg::UnknownWordsLoaded(ticket, res) => {
                if !self.pager.is_current(&ticket) {
                    return false;
                }
                self.unknown_words.clear();
                match res {
                    Ok(words) => self.unknown_words = words,
                    Err(e) => log::error!("Failed to load unknown words: {}", e),
                }
                if ticket.story.is_some() {
                    ctx.link().send_message(TextReviewMsg::CheckAudio(ticket));
                }
                true
            }
            TextReviewMsg::CheckAudio(ticket) => {
                let Some(story) = ticket.story.clone() else {
                    return false;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let url = api::audio_exists(&story).await;
                    link.send_message(TextReviewMsg::AudioChecked(ticket, url));
                });
                false
            }
            TextReviewMsg::AudioChecked(ticket, url) => {
                if !self.pager.is_current(&ticket) {
                    return false;
                }
                self.audio_url = url;
                true
            }
            TextReviewMsg::ClickWord(index) => {
                let toggled = self.document.toggle_unknown(index);
                if toggled && self.config.reveal_trigger == RevealTrigger::Combined {
                    self.document.toggle_reading(index);
                }
                toggled
            }
            TextReviewMsg::ToggleReading(index) => self.document.toggle_reading(index),
            TextReviewMsg::HoverWord(index, show) => self.document.set_reading(index, show),
            TextReviewMsg::ShowResults => {
                let partition = self.document.partition();
                self.summary = Some(partition.summary(&self.config.summary_separator));
                if self.config.submission {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::submit_words(&partition).await;
                        link.send_message(TextReviewMsg::Submitted(result));
                    });
                }
                true
            }
            TextReviewMsg::Submitted(res) => {
                match res {
                    Ok(()) => log::info!("Submitted word results"),
                    Err(e) => log::error!("Failed to send results: {}", e),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let show_results = ctx.link().callback(|_| TextReviewMsg::ShowResults);

        html! {
            <div class="text-review">
                { self.render_pager(ctx) }
                { self.render_audio() }
                { self.render_status() }
                <div id="text" class="text-content">
                    { for self.document.nodes.iter().enumerate().map(|(idx, node)| self.render_node(ctx, idx, node)) }
                </div>
                <div class="review-actions">
                    <button id="show" onclick={show_results} disabled={self.document.word_count() == 0}>
                        {"Show results"}
                    </button>
                </div>
                <pre id="output">{ self.summary.clone().unwrap_or_default() }</pre>
                { self.render_unknown_words() }
            </div>
        }
    }
}

impl TextReview {
    fn start(&mut self, ctx: &Context<Self>) {
        if self.config.is_multi_story() {
            self.ticket = None;
            self.document.clear();
            self.unknown_words.clear();
            self.audio_url = None;
            self.loading = true;
            ctx.link().send_message(TextReviewMsg::LoadStories);
        } else {
            let ticket = self.pager.load_document();
            self.begin_load(ctx, ticket.clone());
            // Single document: the reference list does not wait for tokens.
            ctx.link()
                .send_message(TextReviewMsg::LoadUnknownWords(ticket));
        }
    }

    /// Reset all per-story state and request tokens and readings together.
    fn begin_load(&mut self, ctx: &Context<Self>, ticket: StoryTicket) {
        self.ticket = Some(ticket.clone());
        self.document.clear();
        self.pending_tokens = None;
        self.pending_readings = None;
        self.unknown_words.clear();
        self.audio_url = None;
        self.summary = None;
        self.loading = true;

        let link = ctx.link().clone();
        let config = self.config.clone();
        let tokens_ticket = ticket.clone();
        spawn_local(async move {
            let result = api::fetch_tokens(&config, tokens_ticket.story.as_deref()).await;
            link.send_message(TextReviewMsg::TokensLoaded(tokens_ticket, result));
        });

        let link = ctx.link().clone();
        let config = self.config.clone();
        spawn_local(async move {
            let readings = match api::fetch_readings(&config, ticket.story.as_deref()).await {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("No reading map, rendering without overlays: {}", e);
                    ReadingMap::new()
                }
            };
            link.send_message(TextReviewMsg::ReadingsLoaded(ticket, readings));
        });
    }

    fn try_render(&mut self, ctx: &Context<Self>) {
        if self.pending_tokens.is_none() || self.pending_readings.is_none() {
            return;
        }
        let tokens = self.pending_tokens.take().unwrap_or_default();
        let readings = self.pending_readings.take().unwrap_or_default();
        self.document = ReviewDocument::from_tokens(&tokens, &readings);
        self.loading = false;
        log::info!(
            "Rendered {} tokens ({} words)",
            self.document.nodes.len(),
            self.document.word_count()
        );

        if self.config.is_multi_story() {
            if let Some(ticket) = self.ticket.clone() {
                ctx.link()
                    .send_message(TextReviewMsg::LoadUnknownWords(ticket));
            }
        }
    }

    fn render_pager(&self, ctx: &Context<Self>) -> Html {
        if !self.config.is_multi_story() || self.pager.is_empty() {
            return html! {};
        }
        let prev = ctx.link().callback(|_| TextReviewMsg::PreviousStory);
        let next = ctx.link().callback(|_| TextReviewMsg::NextStory);
        let on_select = {
            let link = ctx.link().clone();
            Callback::from(move |e: Event| {
                if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                    if let Ok(index) = select.value().parse::<isize>() {
                        link.send_message(TextReviewMsg::LoadStory(index));
                    }
                }
            })
        };
        let current = self.pager.current_index();

        html! {
            <div class="story-pager">
                <button id="prev" onclick={prev} disabled={!self.pager.can_go_previous()}>{"← Previous"}</button>
                <select id="story-select" onchange={on_select}>
                    { for self.pager.stories().iter().enumerate().map(|(idx, story)| html! {
                        <option value={idx.to_string()} selected={idx == current}>{ story.clone() }</option>
                    }) }
                </select>
                <button id="next" onclick={next} disabled={!self.pager.can_go_next()}>{"Next →"}</button>
                <span class="story-position">{ format!("{}/{}", current + 1, self.pager.len()) }</span>
            </div>
        }
    }

    fn render_audio(&self) -> Html {
        match &self.audio_url {
            Some(url) => html! {
                <div class="story-audio">
                    <audio id="audio" controls={true} src={url.clone()}></audio>
                </div>
            },
            None => html! {},
        }
    }

    fn render_status(&self) -> Html {
        if self.loading {
            html! { <div class="loading">{"Loading text..."}</div> }
        } else {
            html! {}
        }
    }

    fn render_node(&self, ctx: &Context<Self>, idx: usize, node: &TextNode) -> Html {
        match node {
            TextNode::LineBreak => html! { <br /> },
            TextNode::Plain(text) => html! { <>{ text.clone() }</> },
            TextNode::Word(word) => self.render_word(ctx, idx, word),
        }
    }

    fn render_word(&self, ctx: &Context<Self>, idx: usize, word: &WordNode) -> Html {
        let onclick = ctx.link().callback(move |_: MouseEvent| TextReviewMsg::ClickWord(idx));
        let class = classes!("word", word.unknown.then_some("unknown"));

        let content = match self.document.overlay(idx) {
            Some(pairs) => html! {
                <>
                    { for pairs.iter().map(|pair| html! {
                        <span class="ruby-char">
                            { pair.character.to_string() }
                            <span class="rt-bpmf">{ pair.reading.clone() }</span>
                        </span>
                    }) }
                </>
            },
            None => html! { <>{ word.original.clone() }</> },
        };

        match self.config.reveal_trigger {
            RevealTrigger::Combined => html! {
                <span {class} data-original={word.original.clone()} {onclick}>{ content }</span>
            },
            RevealTrigger::Click => {
                let oncontextmenu = ctx.link().callback(move |e: MouseEvent| {
                    e.prevent_default();
                    TextReviewMsg::ToggleReading(idx)
                });
                html! {
                    <span {class} data-original={word.original.clone()} {onclick} {oncontextmenu}>{ content }</span>
                }
            }
            RevealTrigger::Hover => {
                let onmouseenter = ctx
                    .link()
                    .callback(move |_: MouseEvent| TextReviewMsg::HoverWord(idx, true));
                let onmouseleave = ctx
                    .link()
                    .callback(move |_: MouseEvent| TextReviewMsg::HoverWord(idx, false));
                html! {
                    <span {class} data-original={word.original.clone()} {onclick} {onmouseenter} {onmouseleave}>{ content }</span>
                }
            }
        }
    }

    fn render_unknown_words(&self) -> Html {
        html! {
            <table id="unknown-table" class="unknown-words">
                <thead>
                    <tr><th>{"Word"}</th><th>{"Pinyin"}</th><th>{"Meaning"}</th></tr>
                </thead>
                <tbody id="unknown-list">
                    { for self.unknown_words.iter().map(|w| html! {
                        <tr>
                            <td>{ w.word.clone() }</td>
                            <td>{ w.pinyin.clone() }</td>
                            <td>{ w.meaning.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    }
}
