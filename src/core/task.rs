use crate::utils::error::Result;

/// A single exercise as a three-stage transformation.
///
/// Every solver turns raw input text into a structured value, derives the
/// answer, and formats it back to text. The stage split keeps parsing
/// failures apart from computation failures and lets the engine narrate
/// progress uniformly.
pub trait Task {
    type Input;
    type Output;

    fn name(&self) -> &'static str;

    fn parse(&self, raw: &str) -> Result<Self::Input>;

    fn compute(&self, input: Self::Input) -> Result<Self::Output>;

    fn render(&self, output: &Self::Output) -> String;
}

pub struct TaskEngine<T: Task> {
    task: T,
}

impl<T: Task> TaskEngine<T> {
    pub fn new(task: T) -> Self {
        Self { task }
    }

    pub fn run(&self, raw: &str) -> Result<String> {
        tracing::debug!("[{}] parsing input", self.task.name());
        let input = self.task.parse(raw)?;

        tracing::debug!("[{}] computing", self.task.name());
        let output = self.task.compute(input)?;

        tracing::debug!("[{}] rendering output", self.task.name());
        Ok(self.task.render(&output))
    }
}
