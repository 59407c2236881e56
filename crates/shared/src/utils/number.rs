use serde::Serializer;

/// Largest magnitude at which every integer is exactly representable as f64.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Writes a whole-valued float as a JSON integer (`2` rather than `2.0`).
/// Fractional, non-finite or out of range values are written unchanged.
pub fn whole_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
