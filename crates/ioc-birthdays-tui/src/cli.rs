//! Command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;

pub const USAGE: &str = "\
Usage: ioc-birthdays [OPTIONS]

Options:
  --roster <PATH>    Roster CSV (overrides IOC_ROSTER_PATH and config)
  --date <YYYY-MM-DD> Reference date instead of today
  --window <DAYS>    Upcoming-birthday window length (default 15)
  --dump             Print all views as JSON and exit
  --search <TEXT>    Start with the roster listing filtered by name
  -h, --help         Show this help
";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub roster: Option<PathBuf>,
    pub date: Option<NaiveDate>,
    pub window: Option<u32>,
    pub dump: bool,
    pub search: Option<String>,
    pub help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };

        match arg.as_str() {
            "--roster" => parsed.roster = Some(PathBuf::from(value("--roster")?)),
            "--date" => {
                let raw = value("--date")?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("Invalid --date '{}', expected YYYY-MM-DD", raw))?;
                parsed.date = Some(date);
            }
            "--window" => {
                let raw = value("--window")?;
                let days = raw
                    .parse::<u32>()
                    .with_context(|| format!("Invalid --window '{}'", raw))?;
                parsed.window = Some(days);
            }
            "--search" => parsed.search = Some(value("--search")?),
            "--dump" => parsed.dump = true,
            "-h" | "--help" => parsed.help = true,
            other => bail!("Unknown argument: {}\n\n{}", other, USAGE),
        }
    }

    Ok(parsed)
}
