mod cli;
mod factorial;
mod prompt;
mod report;
mod summary;

use clap::Parser;

use cli::Args;
use prompt::Prompt;
use report::Report;

fn main() {
    let args = Args::parse();
    let report = Report {
        trace: args.trace,
        summary: args.summary,
    };

    if args.interactive {
        match Prompt::new(report) {
            Ok(mut prompt) => prompt.run(),
            Err(e) => {
                eprintln!("[Prompt] Could not start the line editor: {e}");
                std::process::exit(1);
            }
        }

        return;
    }

    for n in args.values() {
        match report.lines(n) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
