use super::status::Filter;
use crate::models::Todo;

/// Ordered subsequence of `items` passing `filter`
///
/// Stable: items keep their relative order, nothing is re-sorted.
pub fn apply_filter(items: &[Todo], filter: Filter) -> Vec<&Todo> {
    if filter == Filter::All {
        return items.iter().collect();
    }

    items.iter().filter(|todo| filter.matches(todo)).collect()
}

/// Number of items passing `filter`, without materializing the view
pub fn count_matching(items: &[Todo], filter: Filter) -> usize {
    items.iter().filter(|todo| filter.matches(todo)).count()
}
