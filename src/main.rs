use std::{env, process};

use anyhow::{Context, Result};
use jiff::civil::{self, Date};
use republican_calendar::RepublicanDate;

/// Shown when no date is given on the command line
const DEFAULT_DATE: Date = civil::date(2024, 10, 7);

fn main() {
    if let Err(e) = run(env::args().nth(1)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(arg: Option<String>) -> Result<()> {
    let date = match arg {
        Some(raw) => raw
            .parse::<Date>()
            .with_context(|| format!("expected a YYYY-MM-DD date, got {raw:?}"))?,
        None => DEFAULT_DATE,
    };
    let republican = RepublicanDate::from_gregorian(date)
        .with_context(|| format!("cannot convert {date}"))?;
    println!("{republican}");
    Ok(())
}
