mod product_card;
mod category_section;
mod search_result;

pub use product_card::ProductCard;
pub use category_section::{CategorySection, HomeSections};
pub use search_result::SearchResultItem;

/// First `limit` characters of `text`.
fn truncate(text: &str, limit: usize) -> &str {
    text.char_indices()
        .nth(limit)
        .map_or(text, |(end, _)| &text[..end])
}

/// Record image, or the site placeholder when the record has none.
fn image_or<'a>(image: &'a str, placeholder: &'a str) -> &'a str {
    if image.is_empty() { placeholder } else { image }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_character_boundaries() {
        assert_eq!(truncate("short", 70), "short");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("লেখক লেখক", 4), "লেখক");
    }

    #[test]
    fn empty_image_falls_back() {
        assert_eq!(image_or("", "/no-image.png"), "/no-image.png");
        assert_eq!(image_or("/cover.jpg", "/no-image.png"), "/cover.jpg");
    }
}
