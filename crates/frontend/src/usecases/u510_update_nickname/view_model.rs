use leptos::prelude::*;

use super::api;
use super::state::NicknameForm;
use crate::shared::config::PageConfig;
use crate::shared::message_log::{MessageLog, Severity};

/// ViewModel for the nickname form
///
/// - `form` holds the input value, hint and in-flight flag
/// - `log` is the page-wide message log the answers are written to
/// - `config` carries the endpoint, cookie name and status colors
#[derive(Clone)]
pub struct NicknameViewModel {
    pub form: RwSignal<NicknameForm>,
    pub log: RwSignal<MessageLog>,
    pub config: PageConfig,
}

impl NicknameViewModel {
    pub fn new(config: PageConfig, log: RwSignal<MessageLog>) -> Self {
        Self {
            form: RwSignal::new(NicknameForm::default()),
            log,
            config,
        }
    }

    pub fn is_busy(&self) -> impl Fn() -> bool + 'static {
        let form = self.form;
        move || form.with(|f| f.in_flight)
    }

    /// Border color of the input for its last outcome, empty before the first one
    pub fn border_color(&self) -> impl Fn() -> String + 'static {
        let form = self.form;
        let colors = self.config.colors.clone();
        move || {
            form.with(|f| {
                f.border
                    .map(|s| colors.for_severity(s).to_string())
                    .unwrap_or_default()
            })
        }
    }

    /// `display` style of the hint for `severity`
    pub fn hint_display(&self, severity: Severity) -> impl Fn() -> &'static str + 'static {
        let form = self.form;
        move || {
            if form.with(|f| f.hint_text(severity).is_some()) {
                ""
            } else {
                "none"
            }
        }
    }

    pub fn hint_text(&self, severity: Severity) -> impl Fn() -> String + 'static {
        let form = self.form;
        move || form.with(|f| f.hint_text(severity).unwrap_or_default().to_string())
    }

    pub fn set_input(&self, value: String) {
        self.form.update(|f| f.value = value);
    }

    /// Put the current nickname back into the input
    pub fn set_original_nickname_command(&self) {
        let original = self.config.original_nickname.clone();
        self.form.update(|f| f.restore_original(&original));
    }

    /// Send the input value and apply the answer once it arrives
    pub fn update_nickname_command(&self) {
        let Some(candidate) = self.form.try_update(NicknameForm::begin_submit).flatten() else {
            log::debug!("nickname update already in flight, ignoring click");
            return;
        };

        let form = self.form;
        let log = self.log;
        let config = self.config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::submit_nickname(&config, &candidate).await;
            if let Some(message) = form.try_update(|f| f.handle_result(&candidate, result)) {
                log.update(|l| {
                    l.push(message);
                });
            }
        });
    }
}
