use dioxus::prelude::*;

use crate::content::{CHAT_DESIGNER_NAME, CHAT_GREETING, CHAT_TITLE};
use crate::core::format::whatsapp_link;
use crate::core::platform;
use crate::t;

pub const CHAT_AVATAR: Asset = asset!("/assets/brand/avatar.svg");

/// Floating WhatsApp button with a small introduction panel.
///
/// The number is passed through to `wa.me` as given.
#[component]
pub fn ChatBubble(
    phone_number: String,
    #[props(default = CHAT_DESIGNER_NAME.to_string())] designer_name: String,
    #[props(default = CHAT_TITLE.to_string())] title: String,
    #[props(default = CHAT_GREETING.to_string())] greeting: String,
) -> Element {
    let mut open = use_signal(|| false);

    let start_chat = move |_: MouseEvent| {
        // Failure is already logged by the platform layer; the panel stays as it is.
        let _ = platform::open_external(&whatsapp_link(&phone_number));
    };

    rsx! {
        button {
            r#type: "button",
            class: "chat-bubble__toggle",
            aria_label: t!("chat-open"),
            aria_expanded: "{open()}",
            onclick: move |_| open.set(!open()),
            span { class: "chat-bubble__icon", aria_hidden: "true", "✆" }
        }

        if open() {
            div { class: "chat-bubble__panel",
                div { class: "chat-bubble__header",
                    img {
                        class: "chat-bubble__avatar",
                        src: CHAT_AVATAR,
                        alt: "{designer_name}",
                        width: "48",
                        height: "48",
                    }
                    div {
                        div { class: "chat-bubble__name", "{designer_name}" }
                        div { class: "chat-bubble__title", "{title}" }
                    }
                }
                p { class: "chat-bubble__greeting", "{greeting}" }
                button {
                    r#type: "button",
                    class: "chat-bubble__start",
                    onclick: start_chat,
                    {t!("chat-start")}
                }
            }
        }
    }
}
