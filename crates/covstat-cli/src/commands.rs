use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::presentation::{AnsiPainter, Painter, PlainPainter};
use crate::types::ColorChoice;
use anyhow::Result;
use covstat_runtime::{Config, LiveMonitor, PollSchedule, StatsClient, resolve_config_path};
use is_terminal::IsTerminal;
use std::io;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    crate::logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?.with_overrides(cli.api_url.as_deref());
    debug!(
        path = %config_path.display(),
        api_url = %config.api_url,
        "configuration loaded"
    );

    let client = StatsClient::from_config(&config)?;
    let painter = painter_for(cli.color);

    let mut out = io::stdout().lock();
    let mut err = io::stderr();
    let mut ctx = HandlerContext::new(&mut out, &mut err, painter.as_ref());

    match cli.command {
        Commands::Summary => handlers::summary::handle(&mut ctx, &client),
        Commands::List { sort } => handlers::list::handle(&mut ctx, &client, sort.into()),
        Commands::Live { cycles } => {
            let mut monitor = LiveMonitor::new(client, PollSchedule::from(&config.live));
            match cycles {
                Some(cycles) => {
                    handlers::live::handle_cycles(&mut ctx, &mut monitor, cycles as usize)
                }
                None => handlers::live::handle(&mut ctx, &mut monitor),
            }
        }
        Commands::Timeline {
            territory,
            days,
            subject,
        } => handlers::timeline::handle(&mut ctx, &client, &territory, days, subject.map(Into::into)),
    }
}

fn painter_for(choice: ColorChoice) -> Box<dyn Painter> {
    let colored = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
        }
    };

    if colored {
        Box::new(AnsiPainter)
    } else {
        Box::new(PlainPainter)
    }
}
