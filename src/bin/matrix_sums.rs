use std::io::Read;
use workshop_solvers::tasks::MatrixSums;
use workshop_solvers::TaskEngine;

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let engine = TaskEngine::new(MatrixSums);
    println!("{}", engine.run(&input)?);
    Ok(())
}
