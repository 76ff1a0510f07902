use air_mouse::cli::{Cli, Commands};
use air_mouse::commands;
use air_mouse::pointer::ScreenSize;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    air_mouse::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay { trace, output, screen } => {
            let report = commands::replay_trace(
                &config,
                &trace,
                output.as_deref(),
                ScreenSize::new(screen.0, screen.1),
            )?;

            println!(
                "Replayed {} frames ({} with hands), {} gesture events, {} pointer actions",
                report.summary.frames,
                report.summary.frames_with_hands,
                report.summary.events().count(),
                report.actions.len()
            );
        }
        Commands::DefaultConfig => {
            println!("{}", commands::default_config_json()?);
        }
    }

    Ok(())
}
