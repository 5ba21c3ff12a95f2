pub mod greetings;
pub mod matrix_product;
pub mod matrix_sums;
pub mod pascal;
pub mod prefix_sequence;
pub mod sales;
pub mod word_frequency;

pub use greetings::Greetings;
pub use matrix_product::MatrixProduct;
pub use matrix_sums::MatrixSums;
pub use pascal::PascalTriangle;
pub use prefix_sequence::PrefixSequence;
pub use sales::SalesReport;
pub use word_frequency::WordFrequency;

use crate::core::TaskEngine;
use crate::utils::error::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskName {
    Greetings,
    MatrixProduct,
    MatrixSums,
    PascalTriangle,
    SalesReport,
    PrefixSequence,
    WordFrequency,
}

/// Runs the named exercise over the raw input text.
pub fn run_task(name: TaskName, raw: &str) -> Result<String> {
    match name {
        TaskName::Greetings => TaskEngine::new(Greetings).run(raw),
        TaskName::MatrixProduct => TaskEngine::new(MatrixProduct).run(raw),
        TaskName::MatrixSums => TaskEngine::new(MatrixSums).run(raw),
        TaskName::PascalTriangle => TaskEngine::new(PascalTriangle).run(raw),
        TaskName::SalesReport => TaskEngine::new(SalesReport).run(raw),
        TaskName::PrefixSequence => TaskEngine::new(PrefixSequence).run(raw),
        TaskName::WordFrequency => TaskEngine::new(WordFrequency).run(raw),
    }
}
