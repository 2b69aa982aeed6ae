pub mod cli;
pub mod config;
pub mod convert;

pub use config::Config;
pub use convert::{convert_value, to_camel_case, to_dot_case, to_kebab_case, Case, CaseError};

#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub case: Case,
    pub output: String,
}
