pub mod scan;
pub mod task;

pub use crate::domain::model::{Matrix, Person, SalesRecord};
pub use crate::utils::error::Result;
pub use scan::LineScanner;
pub use task::{Task, TaskEngine};
