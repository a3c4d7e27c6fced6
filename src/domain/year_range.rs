// Build-year range matching

/// Inclusive range check where an absent bound is unbounded on that side.
///
/// Inverted ranges (`from > to`) are evaluated as written and match nothing.
pub fn matches_year_range(year: i32, from: Option<i32>, to: Option<i32>) -> bool {
    from.is_none_or(|start| start <= year) && to.is_none_or(|end| year <= end)
}
