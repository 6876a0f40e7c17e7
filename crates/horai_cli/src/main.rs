use clap::{Parser, Subcommand};
use horai_core::{CivilDate, Houses, Sign, normalize_360};
use horai_periods::{
    Lot, NatalContext, PeriodSystem, releasing_years, resolve_periods, ruler_sequence_for,
    strategy_for,
};

#[derive(Parser)]
#[command(name = "horai", about = "Time-lordship period CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the chain of active periods for a date
    Periods {
        /// Period system: vimshottari, releasing, firdaria, profection
        system: String,
        /// Birth date (YYYY-MM-DD, UTC)
        #[arg(long)]
        birth: String,
        /// Query date (YYYY-MM-DD, UTC)
        #[arg(long)]
        date: String,
        /// Nine natal tropical longitudes in canonical body order,
        /// comma-separated degrees
        #[arg(long, value_delimiter = ',', num_args = 9)]
        lons: Vec<f64>,
        /// Ascendant longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Midheaven longitude in degrees
        #[arg(long)]
        mc: f64,
        /// Twelve house cusp longitudes, comma-separated degrees
        /// (defaults to whole signs from the ascendant)
        #[arg(long, value_delimiter = ',', num_args = 12)]
        cusps: Option<Vec<f64>>,
        /// Deepest level to resolve (1-4)
        #[arg(long, default_value = "2")]
        level: u8,
        /// Releasing lot: fortune or spirit
        #[arg(long, default_value = "fortune")]
        lot: String,
    },
    /// Print a system's ruler sequence
    Registry {
        /// Period system: vimshottari, releasing, firdaria, profection
        system: String,
        /// Use the night-birth sequence (Firdaria only)
        #[arg(long)]
        night: bool,
    },
}

fn parse_system(s: &str) -> PeriodSystem {
    match s {
        "vimshottari" => PeriodSystem::Vimshottari,
        "releasing" => PeriodSystem::ZodiacalReleasing,
        "firdaria" => PeriodSystem::Firdaria,
        "profection" => PeriodSystem::AnnualProfection,
        _ => {
            eprintln!("Invalid system: {s}");
            eprintln!("Valid: vimshottari, releasing, firdaria, profection");
            std::process::exit(1);
        }
    }
}

fn parse_lot(s: &str) -> Lot {
    match s {
        "fortune" => Lot::Fortune,
        "spirit" => Lot::Spirit,
        _ => {
            eprintln!("Invalid lot: {s} (fortune or spirit)");
            std::process::exit(1);
        }
    }
}

fn parse_date(s: &str) -> CivilDate {
    let parts: Vec<&str> = s.split('-').collect();
    let parsed = match parts.as_slice() {
        [y, m, d] => match (y.parse(), m.parse(), d.parse()) {
            (Ok(y), Ok(m), Ok(d)) => Some(CivilDate::new(y, m, d)),
            _ => None,
        },
        _ => None,
    };
    match parsed {
        // Reject days that would roll into the next month (1990-02-31)
        Some(date) if date.is_valid() => date,
        _ => {
            eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Periods {
            system,
            birth,
            date,
            lons,
            asc,
            mc,
            cusps,
            level,
            lot,
        } => {
            let system = parse_system(&system);
            let lot = parse_lot(&lot);
            let birth_jd = parse_date(&birth).to_jd();
            let query_jd = parse_date(&date).to_jd();

            if lons.len() != 9 {
                eprintln!("--lons requires 9 comma-separated longitudes");
                std::process::exit(1);
            }
            let mut longitudes = [0.0; 9];
            longitudes.copy_from_slice(&lons);

            let mut cusp_arr = [0.0; 12];
            match cusps {
                Some(values) if values.len() == 12 => cusp_arr.copy_from_slice(&values),
                Some(_) => {
                    eprintln!("--cusps requires 12 comma-separated longitudes");
                    std::process::exit(1);
                }
                None => {
                    // Whole signs: cusp 1 at the ascendant's sign start
                    let first = (Sign::from_longitude(asc).index() as f64) * 30.0;
                    for (i, c) in cusp_arr.iter_mut().enumerate() {
                        *c = normalize_360(first + 30.0 * i as f64);
                    }
                }
            }

            let houses = Houses {
                cusps: cusp_arr,
                ascendant: asc,
                midheaven: mc,
                armc: 0.0,
                vertex: 0.0,
            };
            let natal = match NatalContext::new(birth_jd, longitudes, &houses) {
                Ok(n) => n,
                Err(e) => {
                    eprintln!("Invalid natal data: {e}");
                    std::process::exit(1);
                }
            };

            let strategy = strategy_for(system, lot);
            let chain = match resolve_periods(strategy.as_ref(), &natal, query_jd, level) {
                Ok(chain) => chain,
                Err(e) => {
                    eprintln!("Resolution failed: {e}");
                    std::process::exit(1);
                }
            };

            println!("{} ({})", system.name(), if natal.is_day_birth() { "day birth" } else { "night birth" });
            for period in &chain {
                let mut flags = String::new();
                if period.peak {
                    flags.push_str(" [peak]");
                }
                if period.loosening {
                    flags.push_str(" [loosening]");
                }
                println!(
                    "  L{} {:<12} {} .. {}  ({:.2} days){}",
                    period.level,
                    period.ruler.name(),
                    CivilDate::from_jd(period.start_jd),
                    CivilDate::from_jd(period.end_jd),
                    period.duration_days(),
                    flags
                );
            }
        }

        Commands::Registry { system, night } => {
            let system = parse_system(&system);
            println!("{}", system.name());
            for (ruler, years) in ruler_sequence_for(system, !night) {
                println!("  {:<12} {:>6.2} years", ruler.name(), years);
            }
            if system == PeriodSystem::ZodiacalReleasing {
                let total: f64 = horai_core::ALL_SIGNS.iter().map(|&s| releasing_years(s)).sum();
                println!("  cycle total {total} years");
            }
        }
    }
}
