//! Decorative star-field data.
//!
//! Stars are sampled uniformly at random and cached by count, so the field
//! only reshuffles when a different number of stars is requested.

use std::ops::Range;
use std::sync::Arc;

use rand::Rng;

/// Star count used by `StarField` when the caller does not pass one.
pub const DEFAULT_STAR_COUNT: usize = 70;

/// Star count used behind the projects showcase.
pub const SHOWCASE_STAR_COUNT: usize = 90;

pub const POSITION_RANGE: Range<f64> = 0.0..100.0;
pub const SIZE_RANGE: Range<f64> = 0.7..2.2;
pub const DURATION_RANGE: Range<f64> = 1.5..3.5;
pub const DELAY_RANGE: Range<f64> = 0.0..4.0;
pub const OPACITY_RANGE: Range<f64> = 0.5..1.0;

/// A single decorative point in the background.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Star {
    /// Horizontal position, percent of the container width
    pub left: f64,
    /// Vertical position, percent of the container height
    pub top: f64,
    /// Diameter in px
    pub size: f64,
    /// Twinkle cycle length in seconds
    pub duration: f64,
    /// Twinkle start offset in seconds
    pub delay: f64,
    pub opacity: f64,
}

impl Star {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(POSITION_RANGE),
            top: rng.random_range(POSITION_RANGE),
            size: rng.random_range(SIZE_RANGE),
            duration: rng.random_range(DURATION_RANGE),
            delay: rng.random_range(DELAY_RANGE),
            opacity: rng.random_range(OPACITY_RANGE),
        }
    }

    /// Inline style placing and animating the star.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.3}px; height: {:.3}px; opacity: {:.3}; \
             animation: {} {:.3}s infinite alternate; animation-delay: {:.3}s;",
            self.left,
            self.top,
            self.size,
            self.size,
            self.opacity,
            crate::animation::TWINKLE.name,
            self.duration,
            self.delay,
        )
    }
}

#[must_use]
pub fn generate_stars<R: Rng>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count).map(|_| Star::random(rng)).collect()
}

/// Star set memoized on the requested count.
///
/// Asking again for the cached count hands back the same allocation; any
/// other count replaces the cached set.
#[derive(Debug, Clone, Default)]
pub struct StarCache {
    entry: Option<(usize, Arc<[Star]>)>,
}

impl StarCache {
    pub fn stars<R: Rng>(&mut self, count: usize, rng: &mut R) -> Arc<[Star]> {
        if let Some((cached, stars)) = &self.entry {
            if *cached == count {
                return Arc::clone(stars);
            }
        }

        let stars: Arc<[Star]> = generate_stars(count, rng).into();
        self.entry = Some((count, Arc::clone(&stars)));
        stars
    }

    #[must_use]
    pub fn cached_count(&self) -> Option<usize> {
        self.entry.as_ref().map(|(count, _)| *count)
    }
}
