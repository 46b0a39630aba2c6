//! Inverse-scale transform that cancels the host's ambient magnification.

/// Fixed-point precision used when comparing magnifications and scales.
pub const MILLI_PRECISION: f32 = 1000.0;

/// Round `value` to thousandths and return it as an integer key.
///
/// Comparing these keys instead of raw floats keeps tiny zoom jitter from
/// rebuilding the transform.
pub fn to_milli_units(value: f32) -> i64 {
    (f64::from(value) * f64::from(MILLI_PRECISION)).round() as i64
}

/// Uniform 2D scale pushed around the overlay text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompensatingTransform {
    scale: f32,
}

impl CompensatingTransform {
    /// Scale applied to both axes.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for CompensatingTransform {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Cached compensating transform, updated only when the rounded zoom changes.
#[derive(Debug, Default)]
pub struct TransformCache {
    cached: CompensatingTransform,
    updates: u64,
}

impl TransformCache {
    /// Transform compensating `magnification`, or `None` at (rounded) 1.000.
    ///
    /// `magnification` must be finite and positive; the renderer validates it.
    pub fn resolve(&mut self, magnification: f32) -> Option<&CompensatingTransform> {
        if to_milli_units(magnification) == to_milli_units(1.0) {
            return None;
        }
        let inverse = 1.0 / magnification;
        if to_milli_units(self.cached.scale) != to_milli_units(inverse) {
            self.cached.scale = inverse;
            self.updates += 1;
            tracing::debug!(magnification, scale = inverse, "Compensating transform updated");
        }
        Some(&self.cached)
    }

    /// Number of times the cached scale has been rewritten.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milli_units_round_to_nearest_thousandth() {
        assert_eq!(to_milli_units(1.0), 1000);
        assert_eq!(to_milli_units(1.0004), 1000);
        assert_eq!(to_milli_units(1.0006), 1001);
        assert_eq!(to_milli_units(0.5), 500);
    }

    #[test]
    fn unit_magnification_has_no_transform() {
        let mut cache = TransformCache::default();
        assert!(cache.resolve(1.0).is_none());
        assert!(cache.resolve(0.9996).is_none());
        assert!(cache.resolve(1.0004).is_none());
        assert_eq!(cache.updates(), 0);
    }

    #[test]
    fn scale_is_inverse_of_magnification() {
        let mut cache = TransformCache::default();
        for zoom in [0.5_f32, 1.25, 2.0, 3.0] {
            let scale = cache.resolve(zoom).unwrap().scale();
            assert_eq!(to_milli_units(scale), to_milli_units(1.0 / zoom));
        }
    }

    #[test]
    fn unchanged_or_jittering_zoom_reuses_cached_scale() {
        let mut cache = TransformCache::default();
        cache.resolve(2.0);
        assert_eq!(cache.updates(), 1);
        cache.resolve(2.0);
        cache.resolve(2.0001);
        assert_eq!(cache.updates(), 1);
        cache.resolve(1.5);
        assert_eq!(cache.updates(), 2);
    }

    #[test]
    fn returning_to_unit_zoom_keeps_the_cached_scale() {
        let mut cache = TransformCache::default();
        cache.resolve(2.0);
        assert!(cache.resolve(1.0).is_none());
        assert_eq!(cache.resolve(2.0).unwrap().scale(), 0.5);
        assert_eq!(cache.updates(), 1);
    }
}
