/// How many of the 24 swell bars fit comfortably at a given panel width.
#[must_use]
pub fn swell_bar_count(width: u16) -> usize {
    match width {
        76..=u16::MAX => 24,
        52..=75 => 16,
        36..=51 => 12,
        _ => 8,
    }
}

/// How many day cards the weekly strip shows.
#[must_use]
pub fn visible_day_count(width: u16) -> usize {
    match width {
        98..=u16::MAX => 7,
        70..=97 => 5,
        50..=69 => 4,
        _ => 3,
    }
}
