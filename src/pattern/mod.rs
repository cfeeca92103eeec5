//! Pattern assets: the reference images searched for on screen.

use image::{GrayImage, RgbImage, imageops};

/// Similarity value that historically selected full-color matching.
pub const COLOR_MATCH_SIMILARITY: f32 = 0.99;

/// Channel depth used when correlating a pattern against a screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Compare full RGB data; accepts only near-exact color matches.
    Color,
    /// Compare grayscale data; tolerant of color shifts.
    Grayscale,
}

impl MatchMode {
    /// Historical mapping: a similarity of exactly 0.99 means color
    /// matching, every other value means grayscale.
    pub fn for_similarity(similarity: f32) -> Self {
        if (similarity - COLOR_MATCH_SIMILARITY).abs() < f32::EPSILON {
            MatchMode::Color
        } else {
            MatchMode::Grayscale
        }
    }
}

/// An immutable reference image plus its acceptance threshold.
///
/// Constructed once per test asset and read-only afterwards. The grayscale
/// variant is precomputed so polling loops never reconvert it.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: String,
    rgb: RgbImage,
    gray: GrayImage,
    similarity: f32,
    mode: MatchMode,
}

impl Pattern {
    /// Build a pattern with the historical mode mapping (similarity 0.99
    /// selects [`MatchMode::Color`]). Similarity is clamped to [0, 1].
    pub fn new(name: impl Into<String>, rgb: RgbImage, similarity: f32) -> Self {
        let similarity = similarity.clamp(0.0, 1.0);
        let mode = MatchMode::for_similarity(similarity);
        Self::with_mode(name, rgb, similarity, mode)
    }

    /// Build a pattern with an explicit match mode, decoupled from the
    /// similarity value.
    pub fn with_mode(
        name: impl Into<String>,
        rgb: RgbImage,
        similarity: f32,
        mode: MatchMode,
    ) -> Self {
        let gray = imageops::grayscale(&rgb);
        Self {
            name: name.into(),
            rgb,
            gray,
            similarity: similarity.clamp(0.0, 1.0),
            mode,
        }
    }

    /// Name used in log messages only.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full-color pixel data.
    pub fn color(&self) -> &RgbImage {
        &self.rgb
    }

    /// Single-channel pixel data.
    pub fn gray(&self) -> &GrayImage {
        &self.gray
    }

    /// Minimum acceptable correlation score for a single-match acceptance.
    pub fn similarity(&self) -> f32 {
        self.similarity
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// (width, height) in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([120, 40, 200]))
    }

    #[test]
    fn similarity_0_99_selects_color_mode() {
        let pattern = Pattern::new("exact", solid(4, 4), 0.99);
        assert_eq!(pattern.mode(), MatchMode::Color);
    }

    #[test]
    fn other_similarities_select_grayscale_mode() {
        for similarity in [0.0, 0.5, 0.8, 0.95, 1.0] {
            let pattern = Pattern::new("tolerant", solid(4, 4), similarity);
            assert_eq!(pattern.mode(), MatchMode::Grayscale);
        }
    }

    #[test]
    fn explicit_mode_overrides_the_mapping() {
        let pattern = Pattern::with_mode("forced", solid(4, 4), 0.99, MatchMode::Grayscale);
        assert_eq!(pattern.mode(), MatchMode::Grayscale);
        assert_eq!(pattern.similarity(), 0.99);
    }

    #[test]
    fn similarity_is_clamped_to_unit_interval() {
        assert_eq!(Pattern::new("low", solid(4, 4), -0.5).similarity(), 0.0);
        assert_eq!(Pattern::new("high", solid(4, 4), 1.5).similarity(), 1.0);
    }

    #[test]
    fn size_reports_pixel_dimensions() {
        assert_eq!(Pattern::new("p", solid(7, 3), 0.8).size(), (7, 3));
    }
}
