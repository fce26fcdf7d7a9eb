use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use streamstats::stream::{Response, Session};
use streamstats::traits::StatsError;

mod args;

use args::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut session = Session::with_config(cli.config());
    info!("starting with {:?}", cli.config());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        for response in session.handle_line(&line) {
            print_response(&mut out, &response, cli.quiet)?;
        }
        out.flush()?;
        if session.is_finished() {
            break;
        }
    }

    info!("processed {} observations", session.stream().count());
    if !cli.quiet {
        writeln!(out, "Exited. Have a good day!")?;
    }
    Ok(())
}

fn print_response(out: &mut impl Write, response: &Response, quiet: bool) -> Result<()> {
    match response {
        Response::Summary(summary) => writeln!(out, "{}", summary)?,
        Response::Warning(e) => eprintln!("{}", warning_line(e)),
        Response::PrecisionPrompt if !quiet => {
            write!(out, "Decimals to include in output: ")?;
        }
        Response::PrecisionPrompt => {}
        Response::PrecisionChanged(p) => info!("precision set to {}", p),
        Response::Reset => info!("statistics reset"),
        Response::Quit => {}
    }
    Ok(())
}

fn warning_line(err: &StatsError) -> String {
    match err {
        StatsError::Malformed(token) => format!("Warning: non numeric input ignored: {}", token),
        StatsError::NonFinite(v) => format!("Warning: non numeric input ignored: {}", v),
        other => format!("Warning: {}", other),
    }
}
