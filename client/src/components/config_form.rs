//! Configuration form: credentials, project name, lookback window.

use leptos::prelude::*;

use crate::config::DEFAULT_DAYS_BACK;
use crate::state::config::{ConfigField, ConfigState};
use crate::state::logs::LogsState;

/// Credential and project form with the explicit fetch action.
#[component]
pub fn ConfigForm(on_fetch: Callback<()>) -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigState>>();
    let logs = expect_context::<RwSignal<LogsState>>();

    let slug = move || {
        let slug = config.get().project_slug();
        if slug.is_empty() { "(empty)".to_owned() } else { slug }
    };
    let resolving = move || config.get().resolving;
    let resolved = move || !config.get().project_id.is_empty();
    let loading = move || logs.get().loading;
    let days_back = move || config.get().days_back;
    let days_hint = move || {
        let days = days_back();
        if days == 1 {
            "Fetch logs from the last day".to_owned()
        } else {
            format!("Fetch logs from the last {days} days")
        }
    };

    let on_instance = move |ev: leptos::ev::Event| {
        config.update(|c| c.set_field(ConfigField::InstanceUrl, event_target_value(&ev)));
    };
    let on_api_key = move |ev: leptos::ev::Event| {
        config.update(|c| c.set_field(ConfigField::ApiKey, event_target_value(&ev)));
    };
    let on_org = move |ev: leptos::ev::Event| {
        config.update(|c| c.set_field(ConfigField::OrgName, event_target_value(&ev)));
    };
    let on_project = move |ev: leptos::ev::Event| {
        config.update(|c| c.set_field(ConfigField::ProjectName, event_target_value(&ev)));
    };
    let on_days = move |ev: leptos::ev::Event| {
        let parsed = event_target_value(&ev).trim().parse::<u32>().unwrap_or(DEFAULT_DAYS_BACK);
        config.update(|c| c.set_days_back(parsed));
    };

    view! {
        <div class="config-form">
            <div class="config-form__hint">
                <strong>"Step 1: "</strong>
                "Enter your credentials, project name, and lookback period. "
                "The project ID will be detected automatically."
            </div>

            <div class="config-form__grid">
                <label class="config-form__field">
                    <span>"Instance URL"</span>
                    <input
                        type="text"
                        placeholder="https://www.braintrust.dev"
                        prop:value=move || config.get().instance_url
                        on:input=on_instance
                    />
                </label>
                <label class="config-form__field">
                    <span>"API Key"</span>
                    <input
                        type="password"
                        placeholder="sk_..."
                        prop:value=move || config.get().api_key
                        on:input=on_api_key
                    />
                </label>
            </div>

            <div class="config-form__grid">
                <label class="config-form__field">
                    <span>"Organization"</span>
                    <input
                        type="text"
                        placeholder="your-org"
                        prop:value=move || config.get().org_name
                        on:input=on_org
                    />
                </label>
                <label class="config-form__field">
                    <span>
                        "Project Name"
                        <Show when=resolving>
                            <em class="config-form__badge">"Fetching project ID..."</em>
                        </Show>
                        <Show when=move || resolved() && !resolving()>
                            <em class="config-form__badge config-form__badge--ok">
                                "Project ID detected"
                            </em>
                        </Show>
                    </span>
                    <input
                        type="text"
                        placeholder="My Project"
                        prop:value=move || config.get().project_name
                        on:input=on_project
                    />
                    <small>"Slugified to: " {slug}</small>
                </label>
            </div>

            <label class="config-form__field config-form__field--narrow">
                <span>"Lookback Period (Days)"</span>
                <input
                    type="number"
                    min="1"
                    max="365"
                    prop:value=move || days_back().to_string()
                    on:input=on_days
                />
                <small>{days_hint}</small>
            </label>

            <button
                class="config-form__fetch"
                disabled=loading
                on:click=move |_| on_fetch.run(())
            >
                {move || if loading() { "Fetching Logs..." } else { "Fetch Recent Logs" }}
            </button>
        </div>
    }
}
