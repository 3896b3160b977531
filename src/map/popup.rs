//! Popup markup for a venue marker

use crate::models::Venue;

/// `$` repeated once per price tier; tier 0 and unknown render nothing
pub fn price_glyphs(price_level: Option<u8>) -> Option<String> {
    price_level
        .filter(|level| *level > 0)
        .map(|level| "$".repeat(level as usize))
}

/// Name, rating, price, categories and address, HTML-escaped
pub fn popup_html(venue: &Venue) -> String {
    let mut lines = vec![format!("<strong>{}</strong>", escape(&venue.name))];

    let mut meta = Vec::new();
    if let Some(rating) = venue.rating {
        meta.push(format!("⭐ {}", rating));
    }
    if let Some(price) = price_glyphs(venue.price_level) {
        meta.push(price);
    }
    if !meta.is_empty() {
        lines.push(meta.join(" · "));
    }

    if !venue.categories.is_empty() {
        lines.push(escape(&venue.categories.join(", ")));
    }
    if let Some(address) = &venue.address {
        lines.push(escape(address));
    }

    format!(r#"<div class="venue-popup" style="color: black;">{}</div>"#, lines.join("<br/>"))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
