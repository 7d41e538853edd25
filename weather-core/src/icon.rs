/// Glyph shown when the icon code has an unknown condition class.
pub const DEFAULT_GLYPH: &str = "🌡️";

/// Maps an OpenWeather icon code ("01d", "10n", ...) to a display glyph.
///
/// The first two characters pick the condition class. Only clear sky and
/// few clouds have a separate night glyph.
pub fn icon_glyph(code: &str) -> &'static str {
    let night = code.ends_with('n');

    match code.get(..2) {
        Some("01") if night => "🌙",
        Some("01") => "☀️",
        Some("02") if night => "☁️",
        Some("02") => "🌤️",
        Some("03") => "☁️",
        Some("04") => "🌥️",
        Some("09") => "🌧️",
        Some("10") => "🌦️",
        Some("11") => "⛈️",
        Some("13") => "🌨️",
        Some("50") => "🌫️",
        _ => DEFAULT_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_and_few_clouds_have_night_variants() {
        assert_eq!(icon_glyph("01d"), "☀️");
        assert_eq!(icon_glyph("01n"), "🌙");
        assert_eq!(icon_glyph("02d"), "🌤️");
        assert_eq!(icon_glyph("02n"), "☁️");
    }

    #[test]
    fn other_classes_ignore_suffix() {
        let expected = [
            ("03", "☁️"),
            ("04", "🌥️"),
            ("09", "🌧️"),
            ("10", "🌦️"),
            ("11", "⛈️"),
            ("13", "🌨️"),
            ("50", "🌫️"),
        ];

        for (prefix, glyph) in expected {
            for suffix in ["d", "n", "", "x"] {
                let code = format!("{prefix}{suffix}");
                assert_eq!(icon_glyph(&code), glyph, "code {code}");
            }
        }
    }

    #[test]
    fn unknown_or_short_codes_use_default() {
        for code in ["", "0", "00d", "12n", "99d", "zz", "é1"] {
            assert_eq!(icon_glyph(code), DEFAULT_GLYPH, "code {code:?}");
        }
    }
}
