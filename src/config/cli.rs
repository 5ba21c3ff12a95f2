use crate::tasks::TaskName;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "workshop-solvers")]
#[command(about = "Solvers for the workshop text-processing exercises")]
pub struct CliConfig {
    /// Exercise to run against standard input
    #[arg(value_enum)]
    pub task: TaskName,

    /// Read the input from a file instead of standard input
    #[arg(long)]
    pub input_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input_path {
            validate_path("input_path", path)?;
        }
        Ok(())
    }
}
