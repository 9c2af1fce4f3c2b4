use crate::utils::error::Result;
use std::path::Path;

/// Source of the context text.
pub trait ContextStore: Send + Sync {
    fn read_context(&self, path: &Path) -> Result<String>;
}

/// Supplies the current local hour (0-23) for traffic estimates.
pub trait Clock: Send + Sync {
    fn current_hour(&self) -> u32;
}
