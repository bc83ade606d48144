pub mod conversion;
pub mod formatter;
pub mod parser;
pub mod types;

// Re-export the main API
pub use conversion::{calendar_to_serial, serial_to_calendar};
pub use formatter::{DEFAULT_DATE_TEMPLATE, format_calendar, render_template};
pub use parser::parse_date_template;
pub use types::*;

#[cfg(test)]
mod tests;
