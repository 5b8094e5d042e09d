use super::selector::select_index;
use super::tables::{DAILY_ADVICE, DAILY_INTROS};

/// Intro sentence plus one piece of advice.
///
/// Unlike transit text this is meant to change from report to report, so the
/// caller supplies the seed. Low bits pick the intro, the next bits the advice.
pub fn daily_summary(seed: u64) -> String {
    let intro = select_index("daily", "intro", seed, DAILY_INTROS.len()).unwrap_or(0);
    let advice = select_index("daily", "advice", seed >> 2, DAILY_ADVICE.len()).unwrap_or(0);
    format!("{}{}", DAILY_INTROS[intro], DAILY_ADVICE[advice])
}
