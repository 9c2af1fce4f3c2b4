pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{FileContextStore, FixedClock, SystemClock};
pub use crate::core::dispatcher::{route, QueryKind};
pub use crate::core::guide::{is_peak_hour, load_context, LocalGuide};
pub use domain::model::{Context, CulturalInfo, FoodItem, SlangResult, TrafficEstimate};
pub use utils::error::{GuideError, Result};
