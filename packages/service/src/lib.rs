pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{ProgressError, Result};
pub use services::dashboard::{DashboardOverview, DashboardService, DashboardStats};
pub use services::progress::{ProgressService, StudentProgress};
pub use store::memory::InMemoryStore;
pub use store::{ActivityRecord, ProgressStore, StudentRecord};
