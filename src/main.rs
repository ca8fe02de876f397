mod app;
mod engine;
mod mincut;

use clap::Parser;

fn main() {
    let cli = app::Cli::parse();
    if let Err(error) = app::run_app(cli) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
