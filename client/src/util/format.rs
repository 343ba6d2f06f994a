//! Display formatting for recipe fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Image shown when a recipe has no usable image URL.
pub const DEFAULT_IMAGE: &str = "default-recipe-image.jpg";

/// Average rating with one decimal, e.g. `"0.0"` or `"3.7"`.
pub fn format_rating(value: f64) -> String {
    format!("{value:.1}")
}

/// Image source for a recipe card or detail header.
pub fn image_src(image_url: Option<&str>) -> String {
    image_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_IMAGE)
        .to_owned()
}

/// Label for a rating option in the selector.
pub fn rating_option_label(value: u8) -> String {
    match value {
        1 => "1 star".to_owned(),
        n => format!("{n} stars"),
    }
}

/// Comment timestamp as `YYYY-MM-DD HH:MM`. Values without a time part are
/// shown as sent.
pub fn comment_time(raw: &str) -> String {
    let raw = raw.trim();
    match raw.split_once('T') {
        Some((date, time)) => format!("{date} {}", time.get(..5).unwrap_or(time)),
        None => raw.to_owned(),
    }
}
