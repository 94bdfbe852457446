//! recspan command-line entry point

use clap::Parser;
use recspan_cli::commands::scan::ScanArgs;

fn main() {
    let args = ScanArgs::parse();
    if let Err(err) = args.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
