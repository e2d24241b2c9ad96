pub const THOUSANDS_SUFFIX: &str = "K";

/// Render a point count for display.
///
/// Counts of 1000 or more are divided by 1000, rounded half up and suffixed
/// with `K`. There is no further scaling, so 999,500 renders as `1000K`.
pub fn format_points(points: u64) -> String {
    if points >= 1000 {
        let thousands = points / 1000 + u64::from(points % 1000 >= 500);
        return format!("{thousands}{THOUSANDS_SUFFIX}");
    }
    points.to_string()
}
