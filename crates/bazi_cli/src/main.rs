use std::path::PathBuf;

use bazi_base::{BaziChart, BaziError, BaziInput, Branch, GanZhi, Gender, Locale, Stem};
use bazi_capability::{CapabilityError, assess};
use bazi_config::{BaziConfig, ConfigError};
use bazi_luck::{
    LuckCycle, LuckError, LuckOptions, cycle_transitions, fleeting_years, luck_cycles,
    select_cycle, start_age_from_term_distance, year_interaction,
};
use bazi_relations::analyze;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use ziwei_base::{
    ZiweiBirth, build_ziwei_chart, bureau_from_number, five_elements_bureau, ziwei_position,
};

mod render;

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi and ZiWei calculation CLI", version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Configuration file (defaults to ./bazi.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output language: zh or en (overrides the configuration)
    #[arg(long, global = true)]
    locale: Option<Locale>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Relations among the eight characters of a chart
    Relations {
        /// Eight stem/branch characters, e.g. 甲子丙寅甲午甲子
        chars: String,
    },
    /// Five-Elements Bureau from year stem and life-palace branch
    Bureau {
        /// Year stem (character or pinyin)
        stem: Stem,
        /// Life-palace branch (character or pinyin)
        branch: Branch,
        /// Also place Ziwei for this lunar day (1-30)
        #[arg(long)]
        day: Option<u8>,
    },
    /// Ziwei position, or a full ZiWei chart from lunar birth data
    Ziwei {
        /// Bureau number (2-6); with --day prints the Ziwei branch only
        #[arg(long, conflicts_with_all = ["year_stem", "month", "hour", "gender"])]
        bureau: Option<u8>,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// Year stem
        #[arg(long, required_unless_present = "bureau")]
        year_stem: Option<Stem>,
        /// Lunar month (1-12)
        #[arg(long, required_unless_present = "bureau")]
        month: Option<u8>,
        /// Hour branch
        #[arg(long, required_unless_present = "bureau")]
        hour: Option<Branch>,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: Gender,
    },
    /// Five-Tiger month stems for a year stem
    Tiger {
        /// Year stem
        stem: Stem,
        /// Only this month branch
        #[arg(long)]
        branch: Option<Branch>,
    },
    /// Five-Rat hour pillars for a day stem
    Hours {
        /// Day stem
        stem: Stem,
        /// Only this hour branch
        #[arg(long)]
        branch: Option<Branch>,
    },
    /// Luck cycles (大运) of a chart
    Luck {
        #[command(flatten)]
        birth: LuckArgs,
        /// Print the transitions between consecutive cycles instead
        #[arg(long)]
        transitions: bool,
    },
    /// Fleeting years (流年) inside one luck cycle
    Fleeting {
        #[command(flatten)]
        birth: LuckArgs,
        /// 1-based luck cycle number
        #[arg(long, default_value = "1")]
        cycle: usize,
    },
    /// Ten-God strengths, pattern and capability scores
    Capability {
        /// Eight characters of a parity-valid chart
        chart: BaziChart,
    },
    /// Pillars with Ten Gods, hidden stems and element counts
    Chart {
        /// Eight characters of a parity-valid chart
        chart: BaziChart,
    },
}

#[derive(Args)]
struct LuckArgs {
    /// Eight characters of a parity-valid chart
    chart: BaziChart,
    /// male or female
    #[arg(long)]
    gender: Gender,
    /// Gregorian birth year
    #[arg(long)]
    birth_year: i32,
    /// Age at which the first cycle starts
    #[arg(long, conflicts_with = "term_days")]
    start_age: Option<u32>,
    /// Days from birth to the governing solar term
    #[arg(long)]
    term_days: Option<u32>,
    /// Number of cycles, 1-12 (overrides the configuration)
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Bazi(#[from] BaziError),
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Luck(#[from] LuckError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl LuckArgs {
    fn options(&self, config: &BaziConfig) -> LuckOptions {
        let start_age = match (self.start_age, self.term_days) {
            (Some(age), _) => age,
            (None, Some(days)) => start_age_from_term_distance(days),
            (None, None) => start_age_from_term_distance(0),
        };
        LuckOptions::new(self.gender, self.birth_year, start_age)
            .with_count(self.count.unwrap_or(config.luck.cycle_count))
    }

    fn cycles(&self, config: &BaziConfig) -> CliResult<Vec<LuckCycle>> {
        Ok(luck_cycles(&self.chart, &self.options(config))?)
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = BaziConfig::load(cli.config.as_deref())?;
    let locale = cli.locale.unwrap_or(config.display.locale);
    let json = cli.json;

    match cli.command {
        Commands::Relations { chars } => {
            let input: BaziInput = chars.parse()?;
            let relations = analyze(&input);
            if json {
                print_json(&relations.report(locale))?;
            } else {
                render::relations(&input, &relations, locale);
            }
        }

        Commands::Bureau { stem, branch, day } => {
            let bureau = five_elements_bureau(stem, branch);
            let ziwei = day
                .map(|d| ziwei_position(bureau, d).ok_or(BaziError::LunarDayOutOfRange(d)))
                .transpose()?;
            if json {
                #[derive(Serialize)]
                struct Out {
                    bureau: ziwei_base::FiveElementsBureau,
                    number: u8,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    ziwei: Option<Branch>,
                }
                print_json(&Out {
                    bureau,
                    number: bureau.number(),
                    ziwei,
                })?;
            } else {
                println!("{} ({})", bureau.label(locale), bureau.number());
                if let Some(z) = ziwei {
                    println!("{}", render::ziwei_line(z, locale));
                }
            }
        }

        Commands::Ziwei {
            bureau: Some(number),
            day,
            ..
        } => {
            let bureau = bureau_from_number(number)?;
            let branch = ziwei_position(bureau, day).ok_or(BaziError::LunarDayOutOfRange(day))?;
            if json {
                print_json(&branch)?;
            } else {
                println!("{}", render::ziwei_line(branch, locale));
            }
        }

        Commands::Ziwei {
            bureau: None,
            day,
            year_stem,
            month,
            hour,
            gender,
        } => {
            let (Some(year_stem), Some(lunar_month), Some(hour_branch)) = (year_stem, month, hour)
            else {
                return Err(CliError::Usage(
                    "--year-stem, --month and --hour are required without --bureau".into(),
                ));
            };
            let chart = build_ziwei_chart(&ZiweiBirth {
                year_stem,
                lunar_month,
                lunar_day: day,
                hour_branch,
                gender,
            })?;
            if json {
                print_json(&chart)?;
            } else {
                render::ziwei_chart(&chart, locale);
            }
        }

        Commands::Tiger { stem, branch } => {
            let months: Vec<GanZhi> = match branch {
                Some(b) => vec![bazi_base::month_pillar(stem, b)],
                None => bazi_base::MONTH_ORDER
                    .iter()
                    .map(|&b| bazi_base::month_pillar(stem, b))
                    .collect(),
            };
            if json {
                print_json(&months)?;
            } else {
                render::tiger(stem, &months, locale);
            }
        }

        Commands::Hours { stem, branch } => {
            let hours: Vec<GanZhi> = match branch {
                Some(b) => vec![bazi_base::hour_pillar(stem, b)],
                None => bazi_base::ALL_BRANCHES
                    .iter()
                    .map(|&b| bazi_base::hour_pillar(stem, b))
                    .collect(),
            };
            if json {
                print_json(&hours)?;
            } else {
                render::hours(stem, &hours, locale);
            }
        }

        Commands::Luck { birth, transitions } => {
            let cycles = birth.cycles(&config)?;
            match (transitions, json) {
                (true, true) => print_json(&cycle_transitions(&cycles))?,
                (true, false) => render::transitions(&cycle_transitions(&cycles), locale),
                (false, true) => print_json(&cycles)?,
                (false, false) => render::luck(&birth.chart, birth.gender, &cycles, locale),
            }
        }

        Commands::Fleeting { birth, cycle } => {
            let cycles = birth.cycles(&config)?;
            let selected = cycle
                .checked_sub(1)
                .and_then(|i| select_cycle(&cycles, i))
                .ok_or_else(|| {
                    CliError::Usage(format!("cycle {cycle} outside 1..={}", cycles.len()))
                })?;
            let years = fleeting_years(&birth.chart, birth.birth_year, selected);
            let day_master = birth.chart.day_master();
            let interactions: Vec<_> = years
                .iter()
                .map(|y| year_interaction(day_master, selected, y.ganzhi))
                .collect();
            if json {
                #[derive(Serialize)]
                struct Out<'a> {
                    cycle: &'a LuckCycle,
                    years: &'a [bazi_luck::FleetingYear],
                    interactions: &'a [bazi_luck::YearInteraction],
                }
                print_json(&Out {
                    cycle: selected,
                    years: &years,
                    interactions: &interactions,
                })?;
            } else {
                render::fleeting(selected, &years, &interactions, locale);
            }
        }

        Commands::Capability { chart } => {
            let assessment = assess(&chart, &config.capability)?;
            if json {
                print_json(&assessment)?;
            } else {
                render::capability(&assessment, locale);
            }
        }

        Commands::Chart { chart } => {
            if json {
                print_json(&chart)?;
            } else {
                render::chart(&chart, locale);
            }
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
