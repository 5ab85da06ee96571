pub mod time_parser;
pub mod url_validator;

pub use time_parser::TimeParser;
