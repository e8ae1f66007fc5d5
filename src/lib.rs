pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::commands::{run_conversion, Conversion};
pub use config::EncoderOptions;
pub use core::date_encoder::DateToDateBeanEncoder;
pub use domain::model::{DateBean, OverflowPolicy};
pub use domain::ports::ModelEncoder;
pub use utils::error::{EncoderError, Result};
