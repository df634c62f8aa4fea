mod finding;
mod formatter;

pub use finding::{FileError, Finding};
pub use formatter::{JsonOutput, OutputFormatter, SelectionOutput};
