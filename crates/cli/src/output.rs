//! Console output shared by the workflow binaries.

use promptops_core::AppResult;
use std::process::ExitCode;

const RULE_WIDTH: usize = 60;

/// Print a framed section title.
pub fn section_header(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule);
    println!("{}", title);
    println!("{}\n", rule);
}

/// Report a workflow result and turn it into the process exit code.
///
/// # Arguments
/// * `workflow` - Name used in the summary line (e.g., "Pull")
/// * `result` - Outcome of the workflow
/// * `next_steps` - Lines printed after a success
pub fn finish<T>(workflow: &str, result: AppResult<T>, next_steps: &[String]) -> ExitCode {
    match result {
        Ok(_) => {
            tracing::info!("{} completed successfully", workflow);
            println!("\n✅ {} completed successfully!", workflow);
            for line in next_steps {
                println!("   {}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{} failed: {}", workflow, e);
            println!("\n❌ {}", e);
            println!("{} failed. Check the messages above.", workflow);
            ExitCode::FAILURE
        }
    }
}
