//! Generic read-only table over JSON rows returned by list endpoints.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;
use serde_json::Value;

/// Column names in first-seen order across all object rows.
pub fn columns(rows: &[Value]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for row in rows {
        let Some(obj) = row.as_object() else {
            continue;
        };
        for key in obj.keys() {
            if !out.iter().any(|c| c == key) {
                out.push(key.clone());
            }
        }
    }
    out
}

/// Display text for one cell.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "—".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "Sí".to_owned(),
        Some(Value::Bool(false)) => "No".to_owned(),
        Some(other) => other.to_string(),
    }
}

/// Column header text: `fecha_hora` becomes `Fecha hora`.
pub fn header_text(column: &str) -> String {
    let spaced = column.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn DataTable(rows: Vec<Value>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="data-table__empty">"Sin registros"</p> }.into_any();
    }
    let cols = columns(&rows);
    let header = cols
        .iter()
        .map(|c| view! { <th>{header_text(c)}</th> })
        .collect_view();
    let body = rows
        .iter()
        .map(|row| {
            let cells = cols
                .iter()
                .map(|c| view! { <td>{cell_text(row.get(c))}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}
