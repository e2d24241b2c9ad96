use std::error::Error;

use chrono::Local;
use clap::Parser;

use season_points::{
    daily_points, format_points, logging, parse_date, resolve_season, schedule_for_date,
};

/// Print the seasonal daily points for a date.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Date to compute points for, as YYYY-MM-DD. Defaults to today in the
    /// local time zone.
    #[arg(long)]
    date: Option<String>,

    /// Print the exact point count instead of the abbreviated form.
    #[arg(long)]
    raw: bool,

    /// Print every day of the season containing the date.
    #[arg(long)]
    schedule: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let date = match &args.date {
        Some(input) => parse_date(input)?,
        None => Local::now().date_naive(),
    };
    let render = |points: u64| {
        if args.raw {
            points.to_string()
        } else {
            format_points(points)
        }
    };

    if args.schedule {
        let schedule = schedule_for_date(date)?;
        println!("{} {}", schedule.season, schedule.season_year);
        for day in &schedule.days {
            println!("{:>3}  {}  {}", day.day_of_season, day.date, render(day.points));
        }
        println!("total: {}", render(schedule.total_points));
        return Ok(());
    }

    let resolution = resolve_season(date)?;
    let points = daily_points(date)?;
    println!(
        "{date}: {} day {} -> {}",
        resolution.season,
        resolution.day_of_season,
        render(points)
    );

    Ok(())
}
