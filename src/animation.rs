use crate::config::ENTRANCE_STAGGER_SECS;

pub const ENTRANCE_CLASS: &str = "fade-in-up";

/// Start delay for the card at `index`, so cards rise one after another.
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * ENTRANCE_STAGGER_SECS)
}

pub fn entrance_style(index: usize) -> String {
    format!("animation-delay: {};", stagger_delay(index))
}
