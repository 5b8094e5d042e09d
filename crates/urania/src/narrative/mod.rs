//! Narrative text for placements, transits and the daily summary.
//!
//! Everything here is table-driven and deterministic for a given input,
//! except the daily summary which takes its seed from the caller.

pub mod daily;
pub mod placement;
pub mod selector;
pub mod tables;
pub mod transit;

pub use daily::daily_summary;
pub use placement::placement_meaning;
pub use selector::{select, select_index, Category};
pub use transit::{
    compose_transit, house_overlay, ActionAdvice, LifeAreaForecast, NarrativeSource,
    TransitNarrative,
};

/// Replace every `{key}` in `template` with its value.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// Theme word for a house; "Life" outside 1-12.
pub fn house_theme(house: u8) -> &'static str {
    match house {
        1..=12 => tables::HOUSE_THEMES[(house - 1) as usize],
        _ => tables::UNKNOWN_HOUSE_THEME,
    }
}
