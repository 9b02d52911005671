use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use palette::{IntoColor, LinSrgb, Mix, Srgb};
use serde::{Deserialize, Serialize};

use crate::data::model::Range;

// ---------------------------------------------------------------------------
// Colormaps
// ---------------------------------------------------------------------------

// Ten evenly spaced sRGB samples of each perceptual map.
const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6d, 0xcd, 0x59],
    [0xb4, 0xde, 0x2c],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: [[u8; 3]; 10] = [
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

const INFERNO: [[u8; 3]; 10] = [
    [0x00, 0x00, 0x04],
    [0x1b, 0x0c, 0x41],
    [0x4a, 0x0c, 0x6b],
    [0x78, 0x1c, 0x6d],
    [0xa5, 0x2c, 0x60],
    [0xcf, 0x44, 0x46],
    [0xed, 0x69, 0x25],
    [0xfb, 0x9b, 0x06],
    [0xf7, 0xd1, 0x3d],
    [0xfc, 0xff, 0xa4],
];

const GRAYSCALE: [[u8; 3]; 2] = [[0x00, 0x00, 0x00], [0xff, 0xff, 0xff]];

/// A continuous colour map sampled on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Grayscale,
}

impl Colormap {
    pub const ALL: [Colormap; 4] = [
        Colormap::Viridis,
        Colormap::Plasma,
        Colormap::Inferno,
        Colormap::Grayscale,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Inferno => "inferno",
            Colormap::Grayscale => "grayscale",
        }
    }

    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Plasma => &PLASMA,
            Colormap::Inferno => &INFERNO,
            Colormap::Grayscale => &GRAYSCALE,
        }
    }

    /// Colour at position `t`. Out-of-range input is clamped, NaN maps to
    /// the low end.
    pub fn sample(&self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let scaled = t * (stops.len() - 1) as f64;
        let lo = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = (scaled - lo as f64) as f32;

        // Interpolate in linear light so midpoints don't go muddy.
        let a = to_linear(stops[lo]);
        let b = to_linear(stops[lo + 1]);
        let rgb: Srgb = a.mix(b, frac).into_color();
        Color32::from_rgb(
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        )
    }
}

fn to_linear([r, g, b]: [u8; 3]) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colormap::ALL
            .into_iter()
            .find(|cm| cm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Colormap::ALL.iter().map(|cm| cm.name()).collect();
                format!("unknown colormap '{s}' (expected one of {})", names.join(", "))
            })
    }
}

// ---------------------------------------------------------------------------
// ColorScale: colour weight → Color32
// ---------------------------------------------------------------------------

/// Maps colour weights onto a colormap over `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub colormap: Colormap,
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn new(colormap: Colormap, min: f64, max: f64) -> Self {
        ColorScale { colormap, min, max }
    }

    /// Span the finite extent of `values`; `[0, 1]` when there is none.
    pub fn from_values(colormap: Colormap, values: &[f64]) -> Self {
        let range = Range::of(values).unwrap_or(Range { min: 0.0, max: 1.0 });
        Self::new(colormap, range.min, range.max)
    }

    /// Position of `v` on `[0, 1]`. A flat range puts everything mid-scale.
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((v - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color_for(&self, v: f64) -> Color32 {
        self.colormap.sample(self.normalize(v))
    }

    /// Which of `bins` equal-width buckets `v` falls into.
    pub fn bin_for(&self, v: f64, bins: usize) -> usize {
        if bins == 0 {
            return 0;
        }
        let t = self.normalize(v);
        if t.is_nan() {
            return 0;
        }
        ((t * bins as f64) as usize).min(bins - 1)
    }

    /// Representative colour of a bucket (its centre).
    pub fn bin_color(&self, bin: usize, bins: usize) -> Color32 {
        let bins = bins.max(1);
        self.colormap.sample((bin as f64 + 0.5) / bins as f64)
    }

    /// `n` evenly spaced `(weight, colour)` pairs from `min` to `max`, for
    /// drawing a colour bar.
    pub fn ticks(&self, n: usize) -> Vec<(f64, Color32)> {
        match n {
            0 => Vec::new(),
            1 => vec![(self.min, self.color_for(self.min))],
            _ => (0..n)
                .map(|i| {
                    let t = i as f64 / (n - 1) as f64;
                    let v = self.min + t * (self.max - self.min);
                    (v, self.colormap.sample(t))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_hits_end_stops_exactly() {
        assert_eq!(Colormap::Viridis.sample(0.0), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(Colormap::Viridis.sample(1.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
        assert_eq!(Colormap::Grayscale.sample(0.0), Color32::BLACK);
        assert_eq!(Colormap::Grayscale.sample(1.0), Color32::WHITE);
    }

    #[test]
    fn sample_clamps_and_handles_nan() {
        let low = Colormap::Plasma.sample(0.0);
        let high = Colormap::Plasma.sample(1.0);
        assert_eq!(Colormap::Plasma.sample(-3.0), low);
        assert_eq!(Colormap::Plasma.sample(7.5), high);
        assert_eq!(Colormap::Plasma.sample(f64::NAN), low);
    }

    #[test]
    fn grayscale_midpoint_is_grey() {
        let mid = Colormap::Grayscale.sample(0.5);
        assert_eq!(mid.r(), mid.g());
        assert_eq!(mid.g(), mid.b());
        assert!(mid.r() > 0x40 && mid.r() < 0xff);
    }

    #[test]
    fn scale_spans_values() {
        let scale = ColorScale::from_values(Colormap::Viridis, &[0.2, 0.6, f64::NAN, 0.4]);
        assert_eq!(scale.min, 0.2);
        assert_eq!(scale.max, 0.6);
        assert_eq!(scale.normalize(0.2), 0.0);
        assert_eq!(scale.normalize(0.6), 1.0);
        assert!((scale.normalize(0.4) - 0.5).abs() < 1e-12);
        assert_eq!(scale.color_for(0.2), Colormap::Viridis.sample(0.0));
    }

    #[test]
    fn flat_scale_maps_to_middle() {
        let scale = ColorScale::from_values(Colormap::Viridis, &[3.0, 3.0]);
        assert_eq!(scale.normalize(3.0), 0.5);
        assert_eq!(scale.bin_for(3.0, 10), 5);
    }

    #[test]
    fn empty_values_fall_back_to_unit_range() {
        let scale = ColorScale::from_values(Colormap::Inferno, &[]);
        assert_eq!((scale.min, scale.max), (0.0, 1.0));
    }

    #[test]
    fn bins_cover_the_whole_range() {
        let scale = ColorScale::new(Colormap::Viridis, 0.0, 1.0);
        assert_eq!(scale.bin_for(0.0, 4), 0);
        assert_eq!(scale.bin_for(0.26, 4), 1);
        assert_eq!(scale.bin_for(0.99, 4), 3);
        assert_eq!(scale.bin_for(1.0, 4), 3);
        assert_eq!(scale.bin_for(42.0, 4), 3);
        assert_eq!(scale.bin_for(f64::NAN, 4), 0);
        assert_eq!(scale.bin_for(0.5, 0), 0);
    }

    #[test]
    fn ticks_run_min_to_max() {
        let scale = ColorScale::new(Colormap::Viridis, -1.0, 1.0);
        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].0, -1.0);
        assert_eq!(ticks[2].0, 0.0);
        assert_eq!(ticks[4].0, 1.0);
        assert_eq!(ticks[4].1, Colormap::Viridis.sample(1.0));
        assert!(scale.ticks(0).is_empty());
    }

    #[test]
    fn colormap_names_parse() {
        for cm in Colormap::ALL {
            assert_eq!(cm.name().parse::<Colormap>(), Ok(cm));
        }
        assert_eq!("VIRIDIS".parse::<Colormap>(), Ok(Colormap::Viridis));
        assert!("jet".parse::<Colormap>().is_err());
    }
}
