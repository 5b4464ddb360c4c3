use dioxus::prelude::*;

use crate::core::error::SiteError;
use crate::core::gallery::{filter_items, CategoryFilter, GalleryItem, GalleryManifest};
use crate::t;

const SKELETON_CARDS: usize = 9;

/// Filterable grid over the bundled gallery manifest.
#[component]
pub fn DesignGallery() -> Element {
    // Parsed once per mount; a failure is logged by the loader, not per render.
    let manifest = use_resource(|| async { GalleryManifest::embedded() });
    let mut filter = use_signal(CategoryFilter::default);

    let body = match &*manifest.read_unchecked() {
        None => rsx! {
            div { class: "gallery__grid",
                for i in 0..SKELETON_CARDS {
                    div { key: "{i}", class: "gallery__skeleton" }
                }
            }
        },
        Some(Err(_)) => rsx! {
            p { class: "gallery__empty", {t!("design-manifest-error")} }
        },
        Some(Ok(manifest)) => {
            let options = manifest.category_options();
            let items = manifest.items();
            let active = filter();
            let selected = active.as_str().to_string();
            let visible = filter_items(&items, &active);

            rsx! {
                div { class: "gallery__controls",
                    label { class: "visually-hidden", r#for: "gallery-filter", {t!("design-filter-label")} }
                    select {
                        id: "gallery-filter",
                        class: "gallery__select",
                        value: "{selected}",
                        onchange: move |evt: FormEvent| {
                            filter.set(CategoryFilter::parse(&evt.value(), &options));
                        },
                        for choice in manifest.category_options() {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }
                }

                if visible.is_empty() {
                    div { class: "gallery__empty", {t!("design-coming-soon")} }
                } else {
                    div { class: "gallery__grid",
                        for item in visible.into_iter().cloned() {
                            GalleryCard { key: "{item.alt}", item }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "gallery",
            h3 { class: "gallery__heading", {t!("design-gallery-heading")} }
            {body}
        }
    }
}

/// One lazily loaded image; falls back to its alt text when the file is missing.
#[component]
fn GalleryCard(item: GalleryItem) -> Element {
    let mut broken = use_signal(|| false);
    let GalleryItem { src, alt, .. } = item;
    let missing_src = src.clone();

    if broken() {
        return rsx! {
            div { class: "gallery__card gallery__card--missing", "{alt}" }
        };
    }

    rsx! {
        div { class: "gallery__card",
            img {
                class: "gallery__image",
                src: "{src}",
                alt: "{alt}",
                loading: "lazy",
                onerror: move |_| {
                    let err = SiteError::AssetMissing { src: missing_src.clone() };
                    tracing::warn!(%err, "gallery image missing");
                    broken.set(true);
                },
            }
        }
    }
}
