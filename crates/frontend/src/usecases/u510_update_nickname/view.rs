use leptos::prelude::*;

use super::view_model::NicknameViewModel;
use crate::shared::config::use_page_config;
use crate::shared::message_log::{use_message_log, Severity};

#[component]
pub fn NicknameUpdater() -> impl IntoView {
    let vm = NicknameViewModel::new(use_page_config(), use_message_log());
    let form = vm.form;
    let original_nickname = vm.config.original_nickname.clone();

    let vm_clone = vm.clone();

    view! {
        <div class="nickname-updater">
            <div class="form-group d-flex align-items-center">
                <span class="mr-2">"Current nickname:"</span>
                <strong id="original-nickname" class="mr-2">{original_nickname}</strong>
                <button
                    type="button"
                    id="set-original-nickname"
                    class="btn btn-sm btn-outline-secondary"
                    disabled=vm.is_busy()
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.set_original_nickname_command()
                    }
                >
                    "Restore"
                </button>
            </div>

            <div class="form-group d-flex">
                <input
                    type="text"
                    id="nickname"
                    class="form-control mr-2"
                    placeholder="New nickname"
                    prop:value=move || form.with(|f| f.value.clone())
                    prop:disabled=vm.is_busy()
                    style:border-color=vm.border_color()
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.set_input(event_target_value(&ev))
                    }
                />
                <button
                    type="button"
                    id="update-nickname"
                    class="btn btn-primary"
                    disabled=vm.is_busy()
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.update_nickname_command()
                    }
                >
                    {
                        let busy = vm.is_busy();
                        move || if busy() { "Updating..." } else { "Update" }
                    }
                </button>
            </div>

            <small
                id="nickname-error"
                class="form-text nickname-error"
                style:display=vm.hint_display(Severity::Error)
            >
                {vm.hint_text(Severity::Error)}
            </small>
            <small
                id="nickname-hint"
                class="form-text nickname-hint"
                style:display=vm.hint_display(Severity::Warning)
            >
                {vm.hint_text(Severity::Warning)}
            </small>
            <small
                id="nickname-info"
                class="form-text nickname-info"
                style:display=vm.hint_display(Severity::Info)
            >
                {vm.hint_text(Severity::Info)}
            </small>
        </div>
    }
}
