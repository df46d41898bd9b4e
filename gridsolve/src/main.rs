use std::io::{self, Write};

use clap::Parser;
use gridsolve_lib::{Cli, Status};

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let status = {
        let mut stdout = io::stdout().lock();
        let status = gridsolve_lib::run(&cli, &mut stdout)?;
        stdout.flush()?;
        status
    };
    if status != Status::Found {
        std::process::exit(status.code());
    }
    Ok(())
}
