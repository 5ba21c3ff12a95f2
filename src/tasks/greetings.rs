use crate::core::scan::{parse_count, LineScanner};
use crate::core::Task;
use crate::domain::model::Person;
use crate::utils::error::{Result, WorkshopError};

/// Greeting generator with age-bracket labels.
///
/// Input: a count N, then N lines of `name age`. Output preserves the input
/// order exactly.
pub struct Greetings;

impl Task for Greetings {
    type Input = Vec<Person>;
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "greetings"
    }

    fn parse(&self, raw: &str) -> Result<Vec<Person>> {
        let mut scanner = LineScanner::new(raw);
        let count = scanner.next_count()?;

        let mut people = Vec::with_capacity(count);
        for line in scanner.take_block(count)? {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let &[name, age] = fields.as_slice() else {
                return Err(WorkshopError::input(format!(
                    "expected 'name age' on line '{}'",
                    line
                )));
            };
            people.push(Person {
                name: name.to_string(),
                age: parse_count(age)? as u32,
            });
        }
        Ok(people)
    }

    fn compute(&self, people: Vec<Person>) -> Result<Vec<String>> {
        Ok(people
            .iter()
            .map(|p| {
                format!(
                    "Hello, {}! You are {} years old.{}",
                    p.name,
                    p.age,
                    p.age_label()
                )
            })
            .collect())
    }

    fn render(&self, greetings: &Vec<String>) -> String {
        greetings.join("\n")
    }
}
