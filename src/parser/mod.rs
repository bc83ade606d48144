//! Date template parsing module
//!
//! This module is responsible for parsing date format templates into their
//! internal token representation. The main entry point is the
//! `parse_date_template` function.

mod template;
mod tokens;

pub use template::parse_date_template;
