use rand::Rng;

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.random::<f64>() * (high - low)
}

/// Generate a random `f64` in `[0, 1)`.
#[inline]
pub(crate) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}
