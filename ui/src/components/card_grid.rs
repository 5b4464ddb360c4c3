use dioxus::prelude::*;

use crate::content::Card;

#[component]
pub fn CardGrid(cards: Vec<Card>) -> Element {
    rsx! {
        section { class: "card-grid",
            for (i, card) in cards.into_iter().enumerate() {
                article {
                    key: "{card.title}",
                    class: "card",
                    style: format!("animation-delay: {}ms", i * 200),
                    span { class: "card__icon", aria_hidden: "true", "{card.icon}" }
                    h3 { class: "card__title", "{card.title}" }
                    p { class: "card__body", "{card.body}" }
                }
            }
        }
    }
}
