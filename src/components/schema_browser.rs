// src/components/schema_browser.rs
use crate::api;
use crate::components::data_table::DataTable;
use crate::table::{TableSchema, TableView};
use serde_json::{Map, Value};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum SchemaMsg {
    SchemaLoaded(Result<Vec<TableSchema>, String>),
    LoadTable(String),
    TableLoaded(String, Result<Vec<Map<String, Value>>, String>),
}

pub struct SchemaBrowser {
    tables: Vec<TableSchema>,
    selected: Option<String>,
    view: TableView,
    loading: bool,
}

impl Component for SchemaBrowser {
    type Message = SchemaMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            SchemaMsg::SchemaLoaded(api::fetch_schema().await)
        });

        Self {
            tables: Vec::new(),
            selected: None,
            view: TableView::default(),
            loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SchemaMsg::SchemaLoaded(res) => {
                self.loading = false;
                match res {
                    Ok(tables) => {
                        log::info!("Loaded schema with {} tables", tables.len());
                        self.tables = tables;
                    }
                    Err(e) => log::error!("Failed to load schema: {}", e),
                }
                true
            }
            SchemaMsg::LoadTable(name) => {
                self.selected = Some(name.clone());
                self.view = TableView::default();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::fetch_table(&name).await;
                    link.send_message(SchemaMsg::TableLoaded(name, result));
                });
                true
            }
            SchemaMsg::TableLoaded(name, res) => {
                if self.selected.as_ref() != Some(&name) {
                    return false;
                }
                match res {
                    Ok(rows) => self.view = TableView::from_rows(&rows),
                    Err(e) => log::error!("Failed to load table {}: {}", name, e),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="loading">{"Loading schema..."}</div> };
        }

        html! {
            <div class="schema-browser">
                <div id="schema">
                    { for self.tables.iter().map(|table| {
                        let name = table.name.clone();
                        let onclick = ctx.link().callback(move |_| SchemaMsg::LoadTable(name.clone()));
                        html! {
                            <div class="table-schema">
                                <h3>{ table.name.clone() }</h3>
                                <p>{ table.column_summary() }</p>
                                <button {onclick}>{ format!("Show {} data", table.name) }</button>
                            </div>
                        }
                    }) }
                </div>
                <DataTable id={"data-table"} view={self.view.clone()} />
            </div>
        }
    }
}
