/// Fresh board seed from JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}
