//! Interactive input loop.
//!
//! Collects the two inputs the organizer needs — a directory path and a
//! simulate answer — re-prompting until both are valid. An invalid simulate
//! answer restarts the loop from the path question.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Parses a yes/no answer: `y` → simulate, `n` → real run, anything else is
/// rejected. Trims and ignores case.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Prompts on stdout and reads from stdin until a valid pair is collected.
pub fn read_organize_request() -> io::Result<(PathBuf, bool)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    read_organize_request_from(&mut input)
}

/// The prompt loop over an arbitrary reader.
pub fn read_organize_request_from<R: BufRead>(input: &mut R) -> io::Result<(PathBuf, bool)> {
    loop {
        print!("Insert a folder path to organize: ");
        io::stdout().flush()?;
        let line = read_line(input)?;
        let path = PathBuf::from(line.trim());

        if !path.is_dir() {
            println!("The provided path does not exist!\n");
            continue;
        }

        print!("Simulate? (y/n): ");
        io::stdout().flush()?;
        let answer = read_line(input)?;

        match parse_yes_no(&answer) {
            Some(simulate) => return Ok((path, simulate)),
            None => {
                println!("Please insert 'n' or 'y' only!\n");
                continue;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input while prompting",
        ));
    }
    Ok(line)
}
