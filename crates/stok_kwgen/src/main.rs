//! `kwgen` command-line entry point.

use stok_kwgen::{parse_args, Command};

fn main() {
    stok_kwgen::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = stok_kwgen::run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: kwgen [options] <file>...");
    eprintln!();
    eprintln!("Prints a LaTeX \\newcommand for every word in the given files.");
    eprintln!("A line starting with ':' sets the prefix for the macros that follow.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o <path>           Write to a file instead of stdout");
    eprintln!("  --marker=<c>        Prefix marker byte (default: ':')");
    eprintln!("  --max-prefix=<n>    Truncate prefixes to n bytes (default: 255)");
    eprintln!("  -h, --help          Show this help");
}
