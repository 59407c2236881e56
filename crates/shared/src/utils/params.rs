/// Parses a path or query identifier. Negative values are rejected along
/// with anything that is not a base-10 integer.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id >= 0)
}
