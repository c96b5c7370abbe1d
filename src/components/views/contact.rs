use crate::components::Icon;
use crate::utils::sleep;
use dioxus::prelude::*;
use std::time::Duration;
use tracing::info;

const SEND_DELAY: Duration = Duration::from_secs(2);
const RESET_DELAY: Duration = Duration::from_secs(3);

/// Simulated submission lifecycle of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl ContactStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            ContactStatus::Idle => "Gửi tin nhắn",
            ContactStatus::Sending => "Đang gửi...",
            ContactStatus::Sent => "Đã gửi!",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ContactStatus::Idle => "send",
            ContactStatus::Sending => "loader",
            ContactStatus::Sent => "check",
        }
    }

    pub fn accepts_submit(self) -> bool {
        self == ContactStatus::Idle
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[component]
pub fn ContactForm() -> Element {
    let mut draft = use_signal(ContactDraft::default);
    let mut status = use_signal(ContactStatus::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !status.peek().accepts_submit() || !draft.peek().is_complete() {
            return;
        }
        status.set(ContactStatus::Sending);
        spawn(async move {
            sleep(SEND_DELAY).await;
            info!(chars = draft.peek().message.chars().count(), "contact message sent");
            draft.set(ContactDraft::default());
            status.set(ContactStatus::Sent);
            sleep(RESET_DELAY).await;
            status.set(ContactStatus::Idle);
        });
    };

    let current = status();
    let fields = draft();

    rsx! {
        form { id: "contactForm", class: "contact-form", onsubmit: on_submit,
            input {
                r#type: "text",
                name: "name",
                placeholder: "Họ và tên",
                value: "{fields.name}",
                oninput: move |e: Event<FormData>| draft.write().name = e.value(),
            }
            input {
                r#type: "email",
                name: "email",
                placeholder: "Email",
                value: "{fields.email}",
                oninput: move |e: Event<FormData>| draft.write().email = e.value(),
            }
            textarea {
                name: "message",
                rows: "5",
                placeholder: "Tin nhắn",
                value: "{fields.message}",
                oninput: move |e: Event<FormData>| draft.write().message = e.value(),
            }
            button {
                r#type: "submit",
                class: if current == ContactStatus::Sent { "btn-primary sent" } else { "btn-primary" },
                disabled: !current.accepts_submit(),
                Icon { name: current.icon().to_string(), class: "w-4 h-4".to_string() }
                " {current.button_label()}"
            }
            if current == ContactStatus::Sent {
                p { class: "contact-thanks",
                    "Cảm ơn bạn đã liên hệ! Tôi sẽ phản hồi sớm nhất có thể."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_idle_accepts_submissions() {
        assert!(ContactStatus::Idle.accepts_submit());
        assert!(!ContactStatus::Sending.accepts_submit());
        assert!(!ContactStatus::Sent.accepts_submit());
    }

    #[test]
    fn status_drives_button() {
        assert_eq!(ContactStatus::Sending.icon(), "loader");
        assert_eq!(ContactStatus::Sent.button_label(), "Đã gửi!");
    }

    #[test]
    fn blank_fields_block_submission() {
        let mut draft = ContactDraft {
            name: "An".to_string(),
            email: "an@example.com".to_string(),
            message: "   ".to_string(),
        };
        assert!(!draft.is_complete());
        draft.message = "Xin chào".to_string();
        assert!(draft.is_complete());
    }
}
