// Extracts the example code blocks of a README into generated test modules

mod code_writer;
mod config;
mod error;
pub mod extractor;
pub mod formatter;
mod runner;
mod utils;

pub use code_writer::CodeWriter;
pub use config::ExtractConfig;
pub use error::{ExtractError, Result};
pub use extractor::{extract_examples, find_example_section, CodeBlock, CodeBlocks, DEFAULT_LANGUAGE};
pub use formatter::{format_example_tests, write_example_tests, GENERATED_FILE_HEADER};
pub use runner::run;
