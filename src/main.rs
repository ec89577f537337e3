use clap::Parser;
use sortdir::output::OutputFormatter;
use sortdir::{cli, prompt};
use std::path::PathBuf;
use std::process;

/// Sort a directory's files into category subfolders.
#[derive(Parser)]
#[command(name = "sortdir", version, about)]
struct Args {
    /// Directory to organize; prompts interactively when omitted
    path: Option<PathBuf>,

    /// Report intended moves without performing them
    #[arg(short, long)]
    simulate: bool,

    /// Filter configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let (base_path, simulate) = match args.path {
        Some(path) => {
            if !path.is_dir() {
                OutputFormatter::error(&format!(
                    "The provided path does not exist: {}",
                    path.display()
                ));
                process::exit(1);
            }
            (path, args.simulate)
        }
        None => match prompt::read_organize_request() {
            // A --simulate flag still forces simulate mode alongside the
            // interactive answer.
            Ok((path, answered_simulate)) => (path, answered_simulate || args.simulate),
            Err(e) => {
                OutputFormatter::error(&format!("Failed to read input: {}", e));
                process::exit(1);
            }
        },
    };

    if let Err(e) = cli::run_with_config(&base_path, simulate, args.config.as_deref()) {
        OutputFormatter::error(&e);
        process::exit(1);
    }
}
