//! Formatting helpers for links and footer text.

use time::OffsetDateTime;

pub fn whatsapp_link(phone_number: &str) -> String {
    format!("https://wa.me/{phone_number}")
}

pub fn mailto_link(address: &str) -> String {
    format!("mailto:{address}")
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

pub fn copyright_line(year: i32, owner: &str, rights: &str) -> String {
    format!("© {year} {owner} — {rights}")
}

/// Hero subtitle shared by the inner pages, e.g. `TY Designs | 2025`.
pub fn brand_year(brand: &str, year: i32) -> String {
    format!("{brand} | {year}")
}
