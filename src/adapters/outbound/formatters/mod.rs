pub mod json_formatter;
pub mod pom_formatter;

pub use json_formatter::JsonFormatter;
pub use pom_formatter::PomFormatter;
