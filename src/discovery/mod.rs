pub mod config;
pub mod filter;
pub mod walker;

pub use filter::is_test_file;
pub use walker::find_test_files;
