//! component-finder - change-impact component resolution

use std::process;

fn main() {
    let code = component_finder_cli::run(std::env::args_os());
    process::exit(code);
}
