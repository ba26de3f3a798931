// src/bin/cli.rs
use npb_schedule::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
