use dioxus::prelude::*;

use crate::components::{CardGrid, FooterStyle, PageShell, PageTheme};
use crate::content::{banner_messages, contact_cards, page_title, BRAND};
use crate::core::drawer::DrawerPolicy;
use crate::core::format::{brand_year, current_year};
use crate::core::nav::SiteSection;
use crate::t;

#[component]
pub fn Contact() -> Element {
    rsx! {
        PageShell {
            section: SiteSection::Contact,
            title: page_title(SiteSection::Contact),
            subtitle: brand_year(BRAND, current_year()),
            banner: banner_messages(SiteSection::Contact),
            policy: DrawerPolicy::PinOnWide,
            theme: PageTheme::Sun,
            footer: FooterStyle::Hidden,
            CardGrid { cards: contact_cards() }
            MessageForm {}
        }
    }
}

/// Visitor message form. Nothing is sent anywhere; submitting only acknowledges locally.
#[component]
fn MessageForm() -> Element {
    let mut sent = use_signal(|| false);

    rsx! {
        section { class: "contact-form",
            form {
                class: "contact-form__card",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    tracing::info!("contact form submitted locally");
                    sent.set(true);
                },
                h3 { class: "contact-form__heading", {t!("contact-form-heading")} }

                label { r#for: "name", {t!("contact-form-name")} }
                input { r#type: "text", id: "name", name: "name", required: true }

                label { r#for: "email", {t!("contact-form-email")} }
                input { r#type: "email", id: "email", name: "email", required: true }

                label { r#for: "message", {t!("contact-form-message")} }
                textarea { id: "message", name: "message", rows: "4", required: true }

                button { r#type: "submit", class: "button button--primary", {t!("contact-form-submit")} }

                if sent() {
                    p { class: "contact-form__sent", role: "status", {t!("contact-form-sent")} }
                }
            }
        }
    }
}
