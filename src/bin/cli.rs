// src/bin/cli.rs
use lab_feeds::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = lab_feeds::log::init() {
        eprintln!("Logging disabled: {e}");
    }
    cli::run()
}
