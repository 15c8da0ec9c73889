// src/components/flashcard_reviewer.rs
use crate::api;
use crate::flashcard::{FlashcardSession, KeyAction};
use crate::text_data::FlashcardWord;
use gloo::timers::callback::Timeout;
use gloo::utils::document;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

const FLIP_MILLIS: u32 = 600;

pub enum FlashcardMsg {
    LoadWord,
    WordLoaded(Result<FlashcardWord, String>),
    Reveal,
    Record(bool),
    Recorded(Result<(), String>),
    KeyPressed(String),
    FlipDone,
}

pub struct FlashcardReviewer {
    session: FlashcardSession,
    flipping: bool,
    recording: bool,
    _keydown: EventListener,
}

impl Component for FlashcardReviewer {
    type Message = FlashcardMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let keydown = EventListener::new(&document(), "keydown", move |event| {
            let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = keyboard_event.key();
            if key == " " {
                keyboard_event.prevent_default();
            }
            link.send_message(FlashcardMsg::KeyPressed(key));
        });

        ctx.link().send_message(FlashcardMsg::LoadWord);

        Self {
            session: FlashcardSession::new(),
            flipping: false,
            recording: false,
            _keydown: keydown,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FlashcardMsg::LoadWord => {
                self.flipping = true;
                let flip_link = ctx.link().clone();
                Timeout::new(FLIP_MILLIS, move || flip_link.send_message(FlashcardMsg::FlipDone))
                    .forget();

                let offset = self.session.offset();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::fetch_next_word(offset).await;
                    link.send_message(FlashcardMsg::WordLoaded(result));
                });
                true
            }
            FlashcardMsg::WordLoaded(res) => {
                match res {
                    Ok(card) => {
                        if card.is_exhausted() {
                            log::info!("No more flashcards after offset {}", self.session.offset());
                        }
                        self.session.apply(card);
                    }
                    Err(e) => log::error!("Failed to load next word: {}", e),
                }
                true
            }
            FlashcardMsg::Reveal => self.session.reveal(),
            FlashcardMsg::Record(known) => {
                if self.recording {
                    return false;
                }
                let Some(record) = self.session.record(known) else {
                    return false;
                };
                self.recording = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::record_flashcard(&record).await;
                    link.send_message(FlashcardMsg::Recorded(result));
                });
                false
            }
            FlashcardMsg::Recorded(res) => {
                self.recording = false;
                match res {
                    Ok(()) => {
                        self.session.advance();
                        ctx.link().send_message(FlashcardMsg::LoadWord);
                    }
                    Err(e) => log::error!("Failed to record flashcard: {}", e),
                }
                false
            }
            FlashcardMsg::KeyPressed(key) => match self.session.key_action(&key) {
                Some(KeyAction::Reveal) => self.session.reveal(),
                Some(KeyAction::Record(known)) => {
                    ctx.link().send_message(FlashcardMsg::Record(known));
                    false
                }
                None => false,
            },
            FlashcardMsg::FlipDone => {
                self.flipping = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let card_class = classes!("card", self.flipping.then_some("flip"));

        if self.session.is_finished() {
            return html! {
                <div id="card" class={card_class}>
                    <div id="word">{"No more words"}</div>
                    <div id="pinyin"></div>
                    <div id="meaning"></div>
                </div>
            };
        }

        let Some(card) = self.session.current() else {
            return html! {
                <div id="card" class={card_class}>
                    <div class="loading">{"Loading..."}</div>
                </div>
            };
        };

        let reveal = ctx.link().callback(|_| FlashcardMsg::Reveal);
        let right = ctx.link().callback(|_| FlashcardMsg::Record(true));
        let wrong = ctx.link().callback(|_| FlashcardMsg::Record(false));
        let revealed = self.session.is_revealed();
        let hidden = |shown: bool| if shown { "" } else { "display: none;" };

        html! {
            <div id="card" class={card_class}>
                <div id="word">{ card.word.clone().unwrap_or_default() }</div>
                <div id="pinyin">{ card.pinyin.clone() }</div>
                <div id="meaning" style={hidden(revealed)}>{ card.meaning.clone() }</div>
                <button id="reveal" onclick={reveal} style={hidden(self.session.shows_reveal())} title="Reveal (Space)">{"Reveal"}</button>
                <hr id="button-divider" style={hidden(revealed)} />
                <div id="answer" style={if revealed { "display: flex;" } else { "display: none;" }}>
                    <button id="right" onclick={right} title="Known (1)">{"✓ I knew it"}</button>
                    <button id="wrong" onclick={wrong} title="Unknown (2)">{"✗ I didn't"}</button>
                </div>
            </div>
        }
    }
}
