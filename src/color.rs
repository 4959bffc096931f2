use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Score bands
// ---------------------------------------------------------------------------

/// One legend band: every weighted score at or above `threshold` (and below
/// the previous band's threshold) falls into it.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub label: &'static str,
    pub threshold: f64,
    pub color: Color32,
}

/// The fixed legend, highest band first. Thresholds and colors are
/// illustrative constants, never derived from the loaded data.
pub const BANDS: [Band; 6] = [
    Band {
        label: "Very High (≥ 3.8)",
        threshold: 3.8,
        color: Color32::from_rgb(128, 0, 0), // dark red
    },
    Band {
        label: "High (3.2–3.79)",
        threshold: 3.2,
        color: Color32::from_rgb(255, 0, 0),
    },
    Band {
        label: "Moderate (2.4–3.19)",
        threshold: 2.4,
        color: Color32::from_rgb(255, 165, 0),
    },
    Band {
        label: "Low (1.6–2.39)",
        threshold: 1.6,
        color: Color32::from_rgb(255, 255, 0),
    },
    Band {
        label: "Very Low (0.8–1.59)",
        threshold: 0.8,
        color: Color32::from_rgb(0, 128, 0),
    },
    Band {
        label: "Minimal (< 0.8)",
        threshold: f64::NEG_INFINITY,
        color: Color32::from_rgb(0, 0, 255),
    },
];

/// The band a weighted score falls into.
pub fn band_for(weighted: f64) -> &'static Band {
    BANDS
        .iter()
        .find(|band| weighted >= band.threshold)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Fill color for a bar at the given weighted score.
pub fn band_color(weighted: f64) -> Color32 {
    band_for(weighted).color
}

/// Outline shade for a bar: the band color with its lightness pulled down.
pub fn band_outline(weighted: f64) -> Color32 {
    darken(band_for(weighted).color, 0.6)
}

// ---------------------------------------------------------------------------
// Shade derivation
// ---------------------------------------------------------------------------

/// Scale a color's HSL lightness by `factor` (0.0–1.0).
fn darken(color: Color32, factor: f32) -> Color32 {
    let srgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness *= factor;
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(band_for(3.8).label, "Very High (≥ 3.8)");
        assert_eq!(band_for(3.79).label, "High (3.2–3.79)");
        assert_eq!(band_for(3.2).label, "High (3.2–3.79)");
        assert_eq!(band_for(2.4).label, "Moderate (2.4–3.19)");
        assert_eq!(band_for(1.6).label, "Low (1.6–2.39)");
        assert_eq!(band_for(0.8).label, "Very Low (0.8–1.59)");
        assert_eq!(band_for(0.79).label, "Minimal (< 0.8)");
    }

    #[test]
    fn scores_below_all_thresholds_land_in_the_bottom_band() {
        assert_eq!(band_color(-1.0), Color32::from_rgb(0, 0, 255));
        assert_eq!(band_color(0.0), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn outline_is_darker_than_fill() {
        let fill = band_color(4.2);
        let outline = band_outline(4.2);
        assert!(outline.r() < fill.r() || outline.g() < fill.g() || outline.b() < fill.b());
    }
}
