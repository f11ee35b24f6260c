pub mod logging;
pub mod terminal;

pub use logging::{LogTarget, init_logging};
pub use terminal::sanitize_line;
