use chrono::{FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};
use clap::{Parser, Subcommand};
use env_logger::Env;
use lair_moon::{
    BestNightsConfig, DEFAULT_MAX_ILLUMINATION, DEFAULT_OBSERVATION_HOUR, best_nights, moon_state,
};
use lair_satellites::{Planet, satellite_positions};
use lair_time::{Epoch, UtcTime};
use log::debug;

#[derive(Parser)]
#[command(name = "lair", about = "Moon phase and planetary satellite calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Moon phase at an instant
    Phase {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), defaults to now
        #[arg(long)]
        date: Option<String>,
    },
    /// List nights with little moonlight
    BestNights {
        /// First local date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Number of days to scan
        #[arg(long, default_value_t = 30)]
        days: u32,
        /// Fixed UTC offset (+HH:MM); uses the system zone when omitted
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<String>,
        /// Local sampling hour (0-23)
        #[arg(long, default_value_t = DEFAULT_OBSERVATION_HOUR)]
        hour: u32,
        /// Local sampling minute (0-59)
        #[arg(long, default_value_t = 0)]
        minute: u32,
        /// Illumination ceiling in [0, 1]
        #[arg(long, default_value_t = DEFAULT_MAX_ILLUMINATION)]
        max_illumination: f64,
    },
    /// Positions of the major moons of Jupiter or Saturn
    Satellites {
        /// jupiter or saturn
        #[arg(long)]
        planet: String,
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), defaults to now
        #[arg(long)]
        date: Option<String>,
    },
}

fn require_epoch(date: Option<&str>) -> Epoch {
    let Some(s) = date else {
        return Epoch::now();
    };
    let utc: UtcTime = s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e} (expected YYYY-MM-DDThh:mm:ssZ)");
        std::process::exit(1);
    });
    Epoch::from_utc_time(&utc).unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e}");
        std::process::exit(1);
    })
}

fn require_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
        eprintln!("Invalid start date '{s}': {e} (expected YYYY-MM-DD)");
        std::process::exit(1);
    })
}

fn require_planet(s: &str) -> Planet {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: jupiter, saturn");
        std::process::exit(1);
    })
}

/// Parse `+HH:MM`, `-HH:MM`, or `Z`.
fn parse_utc_offset(s: &str) -> Result<FixedOffset, String> {
    if s.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    s.parse::<FixedOffset>()
        .map_err(|e| format!("expected +HH:MM or -HH:MM, got {s} ({e})"))
}

fn print_best_nights<Tz: TimeZone>(
    start: NaiveDate,
    days: u32,
    tz: &Tz,
    config: &BestNightsConfig,
) where
    Tz::Offset: std::fmt::Display,
{
    let nights = best_nights(start, days, tz, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    if nights.is_empty() {
        println!(
            "No nights at or below {:.0}% illumination",
            config.max_illumination * 100.0
        );
        return;
    }
    for night in &nights {
        println!(
            "{}  {:>5.1}%  {:<16} {}",
            night.date.format("%Y-%m-%d %H:%M %:z"),
            night.illumination * 100.0,
            night.phase_name.name(),
            night.quality.label()
        );
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Phase { date } => {
            let epoch = require_epoch(date.as_deref());
            let state = moon_state(epoch);
            println!("Epoch:        {epoch} (JD {:.5})", epoch.as_jd_utc());
            println!("Phase:        {}", state.phase_name.name());
            println!("Fraction:     {:.4}", state.fraction);
            println!("Age:          {:.2} days", state.age_days);
            println!("Illumination: {:.1}%", state.illumination * 100.0);
            println!("Sprite:       {}", state.sprite_bucket);
        }

        Commands::BestNights {
            start,
            days,
            utc_offset,
            hour,
            minute,
            max_illumination,
        } => {
            let start = require_date(&start);
            let config = BestNightsConfig {
                observation_hour: hour,
                observation_minute: minute,
                max_illumination,
            };
            match utc_offset {
                Some(s) => {
                    let tz = parse_utc_offset(&s).unwrap_or_else(|e| {
                        eprintln!("Invalid UTC offset: {e}");
                        std::process::exit(1);
                    });
                    debug!("scanning in fixed offset {tz}");
                    print_best_nights(start, days, &tz, &config);
                }
                None => print_best_nights(start, days, &Local, &config),
            }
        }

        Commands::Satellites { planet, date } => {
            let planet = require_planet(&planet);
            let epoch = require_epoch(date.as_deref());
            println!("{planet} at {epoch}");
            for p in satellite_positions(planet, epoch) {
                println!(
                    "  {:<10} x = {:>+8.3}  depth = {:>+8.3}  {}",
                    p.name,
                    p.x,
                    p.depth,
                    if p.behind_planet { "behind" } else { "in front" }
                );
            }
        }
    }
}
