//! Console output formatting.
//!
//! All user-facing lines are built here so the wording stays in one place:
//! the per-move report lines, the summary block, and error styling. Styling
//! wraps the text; it never changes it.

use crate::organizer::Summary;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

pub struct OutputFormatter;

impl OutputFormatter {
    /// Line reporting a performed move: `Moved: <file> -> <category>/`.
    pub fn move_line(file_name: &str, category_dir: &str) -> String {
        format!("{} {} -> {}/", "Moved:".green(), file_name, category_dir)
    }

    /// Line reporting a simulated move:
    /// `[SIMULATE] Moved: <file> -> <category>/`.
    pub fn simulate_line(file_name: &str, category_dir: &str) -> String {
        format!(
            "{} Moved: {} -> {}/",
            "[SIMULATE]".yellow(),
            file_name,
            category_dir
        )
    }

    /// Prints an informational header line.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints an error message to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints the summary block: `Summary:` then one line per category in
    /// working-set order, `<category>: <count> file(s)`.
    pub fn print_summary(summary: &Summary) {
        println!("\n{}", "Summary:".bold());
        for (category, count) in summary.iter() {
            println!("{}: {} file(s)", category.dir_name(), count);
        }
    }

    /// Progress bar for the real move pass.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }
}
