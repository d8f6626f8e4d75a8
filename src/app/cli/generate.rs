//! Generate command output.

use crate::GenerateRequest;
use crate::domain::AppError;

pub fn run_generate(request: GenerateRequest) -> Result<(), AppError> {
    let outcome = crate::generate(&request)?;

    println!(
        "✅ Generated {} for {} node(s) in {}",
        outcome.master_file,
        outcome.nodes.len(),
        outcome.configuration_path.display()
    );
    for node in &outcome.nodes {
        println!("  {}", node);
    }
    for warning in &outcome.warnings {
        println!("⚠️  {}", warning);
    }
    Ok(())
}
