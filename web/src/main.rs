use dioxus::prelude::*;

use ui::components::ChatBubble;
use ui::content::{site_description, site_title, WHATSAPP_NUMBER};
use ui::core::nav::{register_navigator, SiteSection};
use ui::views::{Contact, Design, Experiences, Home, NotFound, Services, SplashScreen};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Splash {},
    #[layout(SiteLayout)]
        #[route("/home")]
        Home {},
        #[route("/services")]
        Services {},
        #[route("/Experiences")]
        Experiences {},
        #[route("/design")]
        Design {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

impl From<SiteSection> for Route {
    fn from(section: SiteSection) -> Self {
        match section {
            SiteSection::Home => Route::Home {},
            SiteSection::Services => Route::Services {},
            SiteSection::Experiences => Route::Experiences {},
            SiteSection::Design => Route::Design {},
            SiteSection::Contact => Route::Contact {},
        }
    }
}

fn go_to(section: SiteSection) {
    let _ = navigator().push(Route::from(section));
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    // Drawer links reach the router through this hook.
    register_navigator(go_to);

    let title = site_title();
    let description = site_description();

    rsx! {
        // Global app resources
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Splash on `/`, then straight to the home page.
#[component]
fn Splash() -> Element {
    rsx! {
        SplashScreen {
            on_elapsed: move |_| {
                tracing::debug!("splash elapsed");
                let _ = navigator().replace(Route::Home {});
            },
        }
    }
}

/// Wraps every content page; the chat bubble floats above whichever page is routed.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Outlet::<Route> {}
        ChatBubble { phone_number: WHATSAPP_NUMBER.to_string() }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        NotFound { path }
    }
}
