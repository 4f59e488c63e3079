/// Representative fill color for a hexagon
///
/// Random points are drawn inside the hexagon's apothem circle around its
/// nominal center. Points that fall off the source image are rejected. The
/// accepted pixels are averaged channel by channel with a truncating integer
/// mean.

use std::f64::consts::TAU;

use image::Rgb;
use log::debug;
use rand::Rng;

use crate::constants::{SAMPLE_MAX_ATTEMPTS, SAMPLE_TARGET};
use crate::geometry::{Hexagon, Point};
use crate::math_utils::{polar_offset, truncated_mean};
use crate::pixel_source::{Pixel, PixelSource};

/// Returned when no sample landed on the image
pub const FALLBACK_COLOR: Pixel = Rgb([0, 0, 0]);

/// Outcome of sampling one hexagon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub color: Pixel,
    pub accepted: usize,
    pub attempts: usize,
}

impl Sample {
    pub fn is_fallback(&self) -> bool {
        self.accepted == 0
    }
}

/// Bounded rejection sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSampler {
    /// Stop once this many samples landed on the image
    pub target: usize,
    /// Stop after this many draws, accepted or not
    pub max_attempts: usize,
}

impl Default for ColorSampler {
    fn default() -> Self {
        Self {
            target: SAMPLE_TARGET,
            max_attempts: SAMPLE_MAX_ATTEMPTS,
        }
    }
}

impl ColorSampler {
    pub fn new(target: usize, max_attempts: usize) -> Self {
        Self { target, max_attempts }
    }

    /// One candidate point: uniform radius in `[0, apothem)`, uniform angle
    /// in `[0, 2π)`. A degenerate apothem collapses to the center.
    pub fn candidate<R: Rng + ?Sized>(hexagon: &Hexagon, rng: &mut R) -> Point {
        let apothem = hexagon.apothem();
        let radius = if apothem > 0.0 { rng.random_range(0.0..apothem) } else { 0.0 };
        let angle = rng.random_range(0.0..TAU);
        hexagon.center() + polar_offset(radius, angle)
    }

    pub fn sample<S: PixelSource + ?Sized, R: Rng + ?Sized>(
        &self,
        source: &S,
        hexagon: &Hexagon,
        rng: &mut R,
    ) -> Sample {
        let mut sums = [0u64; 3];
        let mut accepted = 0;
        let mut attempts = 0;

        while accepted < self.target && attempts < self.max_attempts {
            attempts += 1;
            let Some(pixel) = source.pixel_at(Self::candidate(hexagon, rng)) else {
                continue;
            };
            for (sum, channel) in sums.iter_mut().zip(pixel.0) {
                *sum += channel as u64;
            }
            accepted += 1;
        }

        if accepted == 0 {
            debug!(
                "no samples landed on the image for hexagon at ({:.1}, {:.1}) after {} attempts",
                hexagon.center().x,
                hexagon.center().y,
                attempts
            );
            return Sample {
                color: FALLBACK_COLOR,
                accepted,
                attempts,
            };
        }

        let color = Rgb(sums.map(|sum| truncated_mean(sum, accepted)));
        Sample {
            color,
            accepted,
            attempts,
        }
    }
}

/// Sample with the default caps (100 accepted, 200 attempts)
pub fn sample_color<S: PixelSource + ?Sized, R: Rng + ?Sized>(
    source: &S,
    hexagon: &Hexagon,
    rng: &mut R,
) -> Pixel {
    ColorSampler::default().sample(source, hexagon, rng).color
}
