#![cfg(test)]
/*!
Theme selector lint for the web build.

The shared theme (`ui/assets/theme/main.css`) and the drawer sheet
(`ui/assets/styling/drawer.css`) are plain files; a renamed class only shows up as a
styling regression in the browser. These checks fail early instead.

When a component's markup changes a class name, update the stylesheet and the lists here.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const DRAWER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/drawer.css"
));

/// Selectors the page shell, banner, cards, gallery, contact form and chat bubble render.
const REQUIRED_THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page--intro",
    ".page--revealed",
    ".page--dark",
    ".page--light",
    ".page--sun",
    ".page__main",
    ".page__menu",
    ".page__footer",
    ".drawer-backdrop",
    ".banner {",
    ".hero__title",
    ".hero__subtitle",
    ".card-grid",
    ".card__title",
    ".gallery__grid",
    ".gallery__select",
    ".gallery__skeleton",
    ".gallery__empty",
    ".gallery__card--missing",
    ".contact-form__card",
    ".contact-form__sent",
    ".chat-bubble__toggle",
    ".chat-bubble__panel",
    ".chat-bubble__start",
    ".splash__spinner",
    ".button--primary",
    ".visually-hidden",
];

const REQUIRED_DRAWER_SELECTORS: &[&str] = &[
    ".drawer {",
    ".drawer__close",
    ".drawer__logo",
    ".drawer__brand",
    ".drawer__links",
    ".drawer__link",
    ".drawer__link--active",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selectors in ui/assets/theme/main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn drawer_sheet_contains_required_selectors() {
    let missing = missing(DRAWER_CSS, REQUIRED_DRAWER_SELECTORS);
    assert!(missing.is_empty(), "Missing drawer selectors:\n{}", missing.join("\n"));
}

#[test]
fn narrow_layout_matches_breakpoint() {
    // 640px is the wide-layout threshold used by the breakpoint observer.
    for css in [THEME_CSS, DRAWER_CSS] {
        assert!(css.contains("@media (max-width: 639px)"));
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

const NAV_DRAWER_RS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/src/components/nav_drawer.rs"
));

#[test]
fn drawer_sheet_is_linked_while_closed() {
    // The closed drawer still renders the link so the first open is already styled.
    let closed_branch = NAV_DRAWER_RS
        .split_once("if !open {")
        .and_then(|(_, rest)| rest.split_once("let links"))
        .map(|(branch, _)| branch)
        .expect("closed branch present in nav_drawer.rs");
    assert!(
        closed_branch.contains("href: DRAWER_CSS"),
        "closed drawer must keep the drawer stylesheet linked"
    );
}
