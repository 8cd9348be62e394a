//! Table of fetched log records; clicking a row selects its trace.

#[cfg(test)]
#[path = "logs_table_test.rs"]
mod logs_table_test;

use leptos::prelude::*;

use records::{LogRecord, format_duration, parse_span_attributes};

use crate::state::logs::LogsState;

/// Tags shown inline before collapsing into a `+n` overflow chip.
const VISIBLE_TAGS: usize = 2;

fn display_name(record: &LogRecord) -> String {
    parse_span_attributes(record.span_attributes.as_ref())
        .name
        .unwrap_or_else(|| record.id.chars().take(8).collect())
}

fn display_kind(record: &LogRecord) -> String {
    parse_span_attributes(record.span_attributes.as_ref())
        .kind
        .unwrap_or_else(|| "trace".to_owned())
}

/// Selection matches on the record id or its root span id, so a row stays
/// highlighted whichever identifier the caller remembered.
fn is_selected(record: &LogRecord, selected: Option<&str>) -> bool {
    selected.is_some_and(|sel| sel == record.id || record.root_span_id.as_deref() == Some(sel))
}

fn visible_tags(record: &LogRecord) -> (Vec<String>, usize) {
    let tags = record.tags.clone().unwrap_or_default();
    let overflow = tags.len().saturating_sub(VISIBLE_TAGS);
    let mut shown = tags;
    shown.truncate(VISIBLE_TAGS);
    (shown, overflow)
}

/// Log list table. Rows render name/kind from span attributes with id-based
/// fallbacks, plus created, duration, tags, and error status.
#[component]
pub fn LogsTable(
    #[prop(into)] selected_id: Signal<Option<String>>,
    on_select: Callback<LogRecord>,
) -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();

    view! {
        <table class="logs-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Created"</th>
                    <th>"Duration"</th>
                    <th>"Tags"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || logs.get().records
                    key=|record| record.id.clone()
                    children=move |record| {
                        let row = record.clone();
                        let row_class = move || {
                            if is_selected(&row, selected_id.get().as_deref()) {
                                "logs-table__row logs-table__row--selected"
                            } else {
                                "logs-table__row"
                            }
                        };
                        let (tags, overflow) = visible_tags(&record);
                        let status = if record.has_error() { "error" } else { "ok" };
                        let on_click = {
                            let record = record.clone();
                            move |_| on_select.run(record.clone())
                        };

                        view! {
                            <tr class=row_class on:click=on_click>
                                <td class="logs-table__name">{display_name(&record)}</td>
                                <td>
                                    <span class="logs-table__kind">{display_kind(&record)}</span>
                                </td>
                                <td>{record.created.display()}</td>
                                <td>{format_duration(record.metrics.as_ref())}</td>
                                <td>
                                    <span class="logs-table__tags">
                                        {tags
                                            .into_iter()
                                            .map(|tag| view! { <span class="logs-table__tag">{tag}</span> })
                                            .collect_view()}
                                        <Show when=move || (overflow > 0)>
                                            <span class="logs-table__tag logs-table__tag--more">
                                                {format!("+{overflow}")}
                                            </span>
                                        </Show>
                                    </span>
                                </td>
                                <td>
                                    <span class=format!("logs-table__status logs-table__status--{status}")>
                                        {status}
                                    </span>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
