// src/components/data_table.rs
use crate::table::TableView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub view: TableView,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    html! {
        <table id={props.id.clone()} class="data-table">
            <thead>
                if !props.view.headers.is_empty() {
                    <tr>
                        { for props.view.headers.iter().map(|h| html! { <th>{ h.clone() }</th> }) }
                    </tr>
                }
            </thead>
            <tbody>
                { for props.view.rows.iter().map(|row| html! {
                    <tr>
                        { for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
