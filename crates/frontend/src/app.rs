use crate::shared::config::{provide_page_config, PageConfig};
use crate::shared::message_log::{provide_message_log, MessageHistory};
use crate::usecases::u510_update_nickname::NicknameUpdater;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Settings rendered by the server into <body data-*>
    provide_page_config(PageConfig::from_document());

    // One log per page, shared by every form that reports into it
    provide_message_log();

    view! {
        <section class="nickname-page">
            <NicknameUpdater />
            <MessageHistory />
        </section>
    }
}
