//! CLI entry point for kitty-colours.

mod cli;

use clap::Parser;
use kitty_colours::app::{run, ColourRequest};
use kitty_colours::config::load_config;
use kitty_colours::error::Error;
use kitty_colours::logging;

fn main() {
    // Usage errors exit with status 2 from clap.
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&Error::from(e)),
    };
    config.apply_overrides(&args.overrides());
    tracing::debug!(
        kitty_dir = %config.kitty_dir.display(),
        theme_dir = %config.theme_dir.display(),
        "resolved config"
    );

    let request = ColourRequest {
        session: args.session.clone(),
        theme: args.theme.clone(),
        write_mode: args.write_mode(),
    };
    if let Err(e) = run(&config, &request) {
        fail(&e);
    }
}

fn fail(err: &Error) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
