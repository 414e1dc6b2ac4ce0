use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Hue step between consecutive colours, in degrees.
const GOLDEN_ANGLE: f32 = 137.508;

/// `n` distinct bar colours. Hues advance by the golden angle, so
/// neighbouring bars never get neighbouring hues however many cities there are.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (30.0 + i as f32 * GOLDEN_ANGLE) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
            let rgb = rgb.into_format::<u8>();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// City colours: city name → Color32
// ---------------------------------------------------------------------------

/// Assigns each city a fixed colour so bars keep their colour while
/// the filters change.
#[derive(Debug, Clone, Default)]
pub struct CityColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CityColors {
    /// Build the mapping from every city in the dataset.
    pub fn new(cities: &[String]) -> Self {
        let palette = generate_palette(cities.len());
        let mapping = cities.iter().cloned().zip(palette).collect();
        CityColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a city.
    pub fn color_for(&self, city: &str) -> Color32 {
        self.mapping.get(city).copied().unwrap_or(self.default_color)
    }
}
