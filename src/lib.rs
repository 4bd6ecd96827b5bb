pub mod capture;
pub mod config;
pub mod fill;
pub mod models;
pub mod mrz_parser;
pub mod processing;
pub mod utils;

pub use config::Config;
pub use models::MrzDocument;
pub use mrz_parser::{parse_mrz, MrzParser};
pub use utils::MrzError;
