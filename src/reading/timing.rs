/// Inter-token delay for a reading rate, rounded to the nearest
/// millisecond.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / f64::from(wpm.max(1))).round() as u64
}
