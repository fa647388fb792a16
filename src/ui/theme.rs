use ratatui::style::Color;

use crate::app::prefs::ThemePref;
use crate::domain::rating::Tone;

/// Concrete colors for one theme. The two palettes mirror each other; only
/// the background/foreground axis flips.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub warn: Color,
    pub error: Color,
    pub favourite: Color,
}

#[must_use]
pub fn palette(pref: ThemePref) -> Palette {
    match pref {
        ThemePref::Dark => Palette {
            bg: Color::Rgb(24, 24, 27),
            fg: Color::Rgb(228, 228, 231),
            muted: Color::Rgb(113, 113, 122),
            border: Color::Rgb(63, 63, 70),
            accent: Color::Rgb(56, 189, 248),
            warn: Color::Rgb(251, 191, 36),
            error: Color::Rgb(248, 113, 113),
            favourite: Color::Rgb(250, 204, 21),
        },
        ThemePref::Light => Palette {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(39, 39, 42),
            muted: Color::Rgb(161, 161, 170),
            border: Color::Rgb(212, 212, 216),
            accent: Color::Rgb(2, 132, 199),
            warn: Color::Rgb(180, 83, 9),
            error: Color::Rgb(220, 38, 38),
            favourite: Color::Rgb(202, 138, 4),
        },
    }
}

/// Maps a rating tone onto the active palette.
#[must_use]
pub fn tone_color(pref: ThemePref, tone: Tone) -> Color {
    match (pref, tone) {
        (ThemePref::Dark, Tone::Red) => Color::Rgb(248, 113, 113),
        (ThemePref::Dark, Tone::Amber) => Color::Rgb(251, 191, 36),
        (ThemePref::Dark, Tone::Zinc) => Color::Rgb(161, 161, 170),
        (ThemePref::Dark, Tone::Emerald) => Color::Rgb(52, 211, 153),
        (ThemePref::Dark, Tone::Teal) => Color::Rgb(45, 212, 191),
        (ThemePref::Dark, Tone::Sky) => Color::Rgb(56, 189, 248),
        (ThemePref::Light, Tone::Red) => Color::Rgb(220, 38, 38),
        (ThemePref::Light, Tone::Amber) => Color::Rgb(217, 119, 6),
        (ThemePref::Light, Tone::Zinc) => Color::Rgb(113, 113, 122),
        (ThemePref::Light, Tone::Emerald) => Color::Rgb(5, 150, 105),
        (ThemePref::Light, Tone::Teal) => Color::Rgb(13, 148, 136),
        (ThemePref::Light, Tone::Sky) => Color::Rgb(2, 132, 199),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_resolves_in_both_themes() {
        for tone in [
            Tone::Red,
            Tone::Amber,
            Tone::Zinc,
            Tone::Emerald,
            Tone::Teal,
            Tone::Sky,
        ] {
            let dark = tone_color(ThemePref::Dark, tone);
            let light = tone_color(ThemePref::Light, tone);
            assert_ne!(dark, palette(ThemePref::Dark).bg);
            assert_ne!(light, palette(ThemePref::Light).bg);
        }
    }
}
