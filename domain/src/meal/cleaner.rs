//! Menu item cleanup
//!
//! The meal service appends allergen reference numbers to dish names
//! (`미역국 5.6.13.`). Display text drops every run of ASCII digits and
//! periods, then trims the ends. Interior whitespace left behind is kept as-is.

/// Strip allergen codes from a raw dish name
pub fn clean_menu_item(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !is_allergen_char(*ch))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_allergen_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}
