/// Parsing errors.
///
/// Defines the errors that strict mode raises while classifying tokens into
/// expression nodes. Evaluation itself cannot fail.
pub mod parse_error;

pub use parse_error::ParseError;
