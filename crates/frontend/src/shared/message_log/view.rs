use leptos::prelude::*;

use super::model::{LogEntry, MessageLog};

/// Slide-down reveal; the keyframes live in the page stylesheet
const REVEAL_ANIMATION: &str = "animation: message-slide-down 0.2s ease-out both;";

/// Provide a fresh message log to the component tree
pub fn provide_message_log() -> RwSignal<MessageLog> {
    let log = RwSignal::new(MessageLog::new());
    provide_context(log);
    log
}

/// Hook to access the shared message log
pub fn use_message_log() -> RwSignal<MessageLog> {
    use_context::<RwSignal<MessageLog>>().unwrap_or_else(|| {
        log::warn!("message log not provided, entries will not reach #message-history");
        provide_message_log()
    })
}

#[component]
pub fn MessageHistory() -> impl IntoView {
    let log = use_message_log();

    view! {
        <ul id="message-history" class="list-unstyled message-history">
            <For
                each=move || log.with(|l| l.entries().cloned().collect::<Vec<_>>())
                key=|entry| entry.id
                children=move |entry: LogEntry| view! { <MessageItem entry=entry /> }
            />
        </ul>
    }
}

#[component]
fn MessageItem(entry: LogEntry) -> impl IntoView {
    let LogEntry {
        date,
        text,
        severity,
        ..
    } = entry;

    view! {
        <li
            class=format!("alert {} d-flex", severity.css_class())
            style=REVEAL_ANIMATION
        >
            <span class="text-muted mr-2">{date}</span>
            <span class="website-message-text">{text}</span>
        </li>
    }
}
