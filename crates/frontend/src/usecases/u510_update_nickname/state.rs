use contracts::system::username_chat::{UpdatePayload, UpdateResult};

use crate::shared::message_log::{LogMessage, Severity};

/// Text shown under the nickname input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub severity: Severity,
    pub text: String,
}

/// State of the nickname form between renders
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NicknameForm {
    pub value: String,
    /// Border color of the input; `None` until the first answer
    pub border: Option<Severity>,
    pub hint: Option<Hint>,
    pub in_flight: bool,
}

impl NicknameForm {
    pub fn restore_original(&mut self, original: &str) {
        self.value = original.to_string();
    }

    /// Text of the hint for `severity`, if that hint is the visible one
    pub fn hint_text(&self, severity: Severity) -> Option<&str> {
        self.hint
            .as_ref()
            .filter(|h| h.severity == severity)
            .map(|h| h.text.as_str())
    }

    /// Start a submission and return the candidate to send.
    ///
    /// Returns `None` while another submission is still running.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.hint = None;
        Some(self.value.clone())
    }

    /// Apply the server answer for `candidate` and return the message to log.
    ///
    /// A success logs the candidate that was sent, not the text the server echoed.
    pub fn handle_result(&mut self, candidate: &str, result: UpdateResult) -> LogMessage {
        self.in_flight = false;

        let severity = Severity::from(result.status());
        let UpdatePayload { date, kind, text } = match result {
            UpdateResult::Success(payload) => {
                // keep whatever was typed after the request went out
                if self.value == candidate {
                    self.value.clear();
                }
                UpdatePayload {
                    text: candidate.to_string(),
                    ..payload
                }
            }
            UpdateResult::Warning(payload) | UpdateResult::Error(payload) => payload,
        };

        self.border = Some(severity);
        self.hint = Some(Hint {
            severity,
            text: kind,
        });

        LogMessage {
            date,
            text,
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::message_log::MessageLog;
    use contracts::system::username_chat::{ApiResponse, ApiStatus};

    fn response(status: ApiStatus, date: &str, kind: &str, text: &str) -> UpdateResult {
        ApiResponse {
            date: date.into(),
            status,
            kind: kind.into(),
            text: text.into(),
        }
        .into()
    }

    /// Type `value`, submit, apply `result`; returns the form and the log
    fn run(value: &str, result: UpdateResult) -> (NicknameForm, MessageLog) {
        let mut form = NicknameForm {
            value: value.to_string(),
            ..Default::default()
        };
        let mut log = MessageLog::new();

        let candidate = form.begin_submit().unwrap();
        let message = form.handle_result(&candidate, result);
        log.push(message);
        (form, log)
    }

    #[test]
    fn test_success_scenario() {
        let (form, log) = run(
            "foo",
            response(ApiStatus::Success, "2024-01-01", "Nickname updated", ""),
        );

        assert_eq!(form.value, "");
        assert_eq!(form.border, Some(Severity::Info));
        assert_eq!(form.hint_text(Severity::Info), Some("Nickname updated"));
        assert_eq!(form.hint_text(Severity::Warning), None);
        assert!(!form.in_flight);

        assert_eq!(log.len(), 1);
        let entry = log.entries().next().unwrap();
        assert_eq!(entry.date, "2024-01-01");
        assert_eq!(entry.text, "foo");
        assert_eq!(entry.severity.css_class(), "website-message");
    }

    #[test]
    fn test_success_logs_sent_candidate() {
        for candidate in ["", "a", "bad name", "Ник"] {
            let (form, log) = run(
                candidate,
                response(ApiStatus::Success, "d", "ok", "server echo"),
            );
            assert_eq!(form.value, "");
            assert_eq!(log.len(), 1);
            assert_eq!(log.entries().next().unwrap().text, candidate);
        }
    }

    #[test]
    fn test_warning_scenario() {
        let (form, log) = run(
            "bad name",
            response(
                ApiStatus::Warning,
                "2024-01-01",
                "Invalid characters",
                "Spaces not allowed",
            ),
        );

        assert_eq!(form.value, "bad name");
        assert_eq!(form.border, Some(Severity::Warning));
        assert_eq!(form.hint_text(Severity::Warning), Some("Invalid characters"));

        assert_eq!(log.len(), 1);
        let entry = log.entries().next().unwrap();
        assert_eq!(entry.text, "Spaces not allowed");
        assert_eq!(entry.severity, Severity::Warning);
    }

    #[test]
    fn test_server_error() {
        let (form, log) = run(
            "x",
            response(ApiStatus::Error, "d", "Not Authenticated", "You are not authenticated."),
        );

        assert_eq!(form.border, Some(Severity::Error));
        assert_eq!(form.hint_text(Severity::Error), Some("Not Authenticated"));
        assert_eq!(log.len(), 1);
        let entry = log.entries().next().unwrap();
        assert_eq!(entry.text, "You are not authenticated.");
        assert_eq!(entry.severity, Severity::Error);
    }

    #[test]
    fn test_transport_error() {
        let (form, log) = run(
            "x",
            UpdateResult::transport_failure("error", "Service Unavailable"),
        );

        assert_eq!(form.hint_text(Severity::Error), Some("error"));
        assert_eq!(log.len(), 1);
        let entry = log.entries().next().unwrap();
        assert_eq!(entry.date, "now");
        assert_eq!(entry.text, "Service Unavailable");
        assert_eq!(entry.severity, Severity::Error);
    }

    #[test]
    fn test_single_flight() {
        let mut form = NicknameForm {
            value: "foo".into(),
            ..Default::default()
        };

        assert_eq!(form.begin_submit().as_deref(), Some("foo"));
        assert_eq!(form.begin_submit(), None);

        form.handle_result("foo", UpdateResult::transport_failure("error", "boom"));
        assert!(!form.in_flight);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_submit_hides_previous_hint() {
        let mut form = NicknameForm::default();
        form.begin_submit();
        form.handle_result("", UpdateResult::transport_failure("error", "boom"));
        assert!(form.hint.is_some());

        form.begin_submit();
        assert_eq!(form.hint, None);
        // border keeps the last color until the next answer
        assert_eq!(form.border, Some(Severity::Error));
    }

    #[test]
    fn test_success_keeps_input_edited_in_flight() {
        let mut form = NicknameForm {
            value: "foo".into(),
            ..Default::default()
        };
        let candidate = form.begin_submit().unwrap();
        form.value = "bar".into();

        let message = form.handle_result(
            &candidate,
            response(ApiStatus::Success, "d", "Nickname updated", ""),
        );

        assert_eq!(form.value, "bar");
        assert_eq!(message.text, "foo");
        assert_eq!(message.severity, Severity::Info);
    }

    #[test]
    fn test_restore_original() {
        let mut form = NicknameForm {
            value: "typed".into(),
            ..Default::default()
        };
        form.restore_original("alice");
        assert_eq!(form.value, "alice");
    }
}
