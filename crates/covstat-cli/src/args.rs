use crate::types::{ColorChoice, LogLevel, SortField, SubjectField};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "covstat")]
#[command(about = "Epidemic statistics as terminal tables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Base URL of the statistics API")]
    pub api_url: Option<String>,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show global totals")]
    Summary,

    #[command(about = "List every territory, largest first")]
    List {
        #[arg(long, default_value = "cases", help = "Metric to sort by")]
        sort: SortField,
    },

    #[command(about = "Stream per-territory changes as the source reports them")]
    Live {
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Stop after this many polls instead of running forever"
        )]
        cycles: Option<u32>,
    },

    #[command(about = "Show the recent history of a territory")]
    Timeline {
        #[arg(default_value = "all", help = "Territory name, or 'all' for global")]
        territory: String,

        #[arg(
            long,
            default_value = "30",
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Number of days to fetch"
        )]
        days: u32,

        #[arg(long, help = "Render a single metric with a bar graph")]
        subject: Option<SubjectField>,
    },
}
