pub mod config;
pub mod core;
pub mod domain;
pub mod tasks;
pub mod utils;

pub use config::CliConfig;
pub use core::{LineScanner, Task, TaskEngine};
pub use domain::model::{Matrix, Person, SalesRecord};
pub use tasks::{run_task, TaskName};
pub use utils::error::{Result, WorkshopError};
