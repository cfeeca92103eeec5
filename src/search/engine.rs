//! Correlation engine: score surfaces and their extrema.
//!
//! Wraps imageproc's normalized cross-correlation. Higher score means a
//! better match for this metric; a distance-style metric (e.g. sum of
//! squared errors) would have to treat the minimum as best instead.

use image::{GrayImage, ImageBuffer, Luma, RgbImage};
use imageproc::template_matching::{MatchTemplateMethod, find_extremes, match_template};

/// Floor written into suppressed surface cells so the global maximum can
/// never land on (or immediately beside) an already-reported match.
pub const SUPPRESSED_SCORE: f32 = -10_000.0;

type Surface = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Correlation scores for every placement of a needle over a haystack.
///
/// An h×w needle over an H×W haystack yields a (W-w+1)×(H-h+1) surface;
/// cell (x, y) scores the placement whose top-left corner is (x, y) in
/// haystack-local coordinates.
pub struct ScoreSurface {
    scores: Surface,
    needle_width: u32,
    needle_height: u32,
}

impl ScoreSurface {
    /// Global maximum score and its haystack-local location.
    pub fn global_max(&self) -> (f32, (u32, u32)) {
        let extremes = find_extremes(&self.scores);
        (extremes.max_value, extremes.max_value_location)
    }

    /// (width, height) of the surface.
    pub fn dimensions(&self) -> (u32, u32) {
        self.scores.dimensions()
    }

    /// Score of a single placement.
    pub fn score_at(&self, x: u32, y: u32) -> f32 {
        self.scores.get_pixel(x, y)[0]
    }

    /// Floor every cell in a needle-sized window centered on `location`
    /// (half the needle extent on each side), clipping silently at the
    /// surface edges.
    pub fn suppress_around(&mut self, location: (u32, u32)) {
        let (width, height) = self.scores.dimensions();
        let half_w = i64::from(self.needle_width / 2);
        let half_h = i64::from(self.needle_height / 2);
        let (cx, cy) = (i64::from(location.0), i64::from(location.1));

        let x0 = (cx - half_w).max(0) as u32;
        let y0 = (cy - half_h).max(0) as u32;
        let x1 = (cx + half_w).min(i64::from(width) - 1) as u32;
        let y1 = (cy + half_h).min(i64::from(height) - 1) as u32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.scores.put_pixel(x, y, Luma([SUPPRESSED_SCORE]));
            }
        }
    }
}

/// Correlate a grayscale needle against a grayscale haystack.
///
/// # Panics
///
/// If the needle is empty or larger than the haystack in either dimension.
/// That is a caller bug (the guard exists to rule it out up front), not a
/// recoverable runtime condition.
pub fn correlate_gray(haystack: &GrayImage, needle: &GrayImage) -> ScoreSurface {
    assert_needle_fits(haystack.dimensions(), needle.dimensions());
    let scores = match_template(
        haystack,
        needle,
        MatchTemplateMethod::CrossCorrelationNormalized,
    );
    ScoreSurface {
        scores,
        needle_width: needle.width(),
        needle_height: needle.height(),
    }
}

/// Correlate full-color images by averaging the per-channel score surfaces.
///
/// The correlation primitive is single-channel, so each RGB channel is
/// matched as its own plane and the three surfaces are averaged point-wise.
///
/// # Panics
///
/// Same preconditions as [`correlate_gray`].
pub fn correlate_color(haystack: &RgbImage, needle: &RgbImage) -> ScoreSurface {
    assert_needle_fits(haystack.dimensions(), needle.dimensions());
    let mut scores = channel_scores(haystack, needle, 0);
    for channel in 1..3 {
        let plane = channel_scores(haystack, needle, channel);
        for (acc, cell) in scores.pixels_mut().zip(plane.pixels()) {
            acc.0[0] += cell.0[0];
        }
    }
    for cell in scores.pixels_mut() {
        cell.0[0] /= 3.0;
    }
    ScoreSurface {
        scores,
        needle_width: needle.width(),
        needle_height: needle.height(),
    }
}

fn channel_scores(haystack: &RgbImage, needle: &RgbImage, channel: usize) -> Surface {
    match_template(
        &channel_plane(haystack, channel),
        &channel_plane(needle, channel),
        MatchTemplateMethod::CrossCorrelationNormalized,
    )
}

fn channel_plane(image: &RgbImage, channel: usize) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y)[channel]])
    })
}

fn assert_needle_fits((hay_w, hay_h): (u32, u32), (needle_w, needle_h): (u32, u32)) {
    assert!(
        needle_w > 0 && needle_h > 0,
        "needle must have non-zero dimensions"
    );
    assert!(
        needle_w <= hay_w && needle_h <= hay_h,
        "needle {needle_w}x{needle_h} does not fit haystack {hay_w}x{hay_h}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::imageops;

    fn checker(width: u32, height: u32, lo: u8, hi: u8) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 { Luma([hi]) } else { Luma([lo]) }
        })
    }

    #[test]
    fn surface_has_reduced_dimensions() {
        let haystack = GrayImage::from_pixel(10, 8, Luma([50]));
        let needle = checker(3, 3, 10, 210);
        let surface = correlate_gray(&haystack, &needle);
        assert_eq!(surface.dimensions(), (8, 6));
    }

    #[test]
    fn exact_copy_maximizes_at_paste_location() {
        let needle = checker(6, 6, 10, 210);
        let mut haystack = GrayImage::from_pixel(40, 30, Luma([50]));
        imageops::replace(&mut haystack, &needle, 12, 9);

        let surface = correlate_gray(&haystack, &needle);
        let (score, location) = surface.global_max();
        assert_eq!(location, (12, 9));
        assert!(score > 0.999, "expected near-perfect score, got {score}");
    }

    #[test]
    fn suppression_floors_a_clipped_window_at_the_corner() {
        let needle = checker(6, 6, 10, 210);
        let mut haystack = GrayImage::from_pixel(40, 30, Luma([50]));
        imageops::replace(&mut haystack, &needle, 0, 0);

        let mut surface = correlate_gray(&haystack, &needle);
        let (_, location) = surface.global_max();
        assert_eq!(location, (0, 0));

        surface.suppress_around(location);
        assert_eq!(surface.score_at(0, 0), SUPPRESSED_SCORE);
        assert_eq!(surface.score_at(3, 3), SUPPRESSED_SCORE);
        // Outside the half-extent window the surface is untouched.
        assert_ne!(surface.score_at(4, 4), SUPPRESSED_SCORE);

        let (score, location) = surface.global_max();
        assert!(
            location.0 > 3 || location.1 > 3,
            "maximum moved outside the suppressed window, got {location:?}"
        );
        assert!(score < 1.0);
    }

    #[test]
    fn color_correlation_matches_exact_copy() {
        use image::Rgb;
        let needle = RgbImage::from_fn(5, 5, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([200, 30, 30])
            } else {
                Rgb([30, 30, 200])
            }
        });
        let mut haystack = RgbImage::from_pixel(30, 20, Rgb([50, 50, 50]));
        imageops::replace(&mut haystack, &needle, 7, 6);

        let surface = correlate_color(&haystack, &needle);
        let (score, location) = surface.global_max();
        assert_eq!(location, (7, 6));
        assert!(score > 0.999, "expected near-perfect score, got {score}");
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn oversized_needle_is_a_precondition_violation() {
        let haystack = GrayImage::from_pixel(5, 5, Luma([50]));
        let needle = GrayImage::from_pixel(6, 5, Luma([50]));
        let _ = correlate_gray(&haystack, &needle);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn empty_needle_is_a_precondition_violation() {
        let haystack = GrayImage::from_pixel(5, 5, Luma([50]));
        let needle = GrayImage::new(0, 0);
        let _ = correlate_gray(&haystack, &needle);
    }
}
