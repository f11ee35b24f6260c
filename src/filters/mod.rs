pub mod apply;
pub mod status;

pub use apply::{apply_filter, count_matching};
pub use status::Filter;
