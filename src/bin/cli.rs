// src/bin/cli.rs
use babynames::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if !cli::run()? {
        std::process::exit(1);
    }
    Ok(())
}
