use color_eyre::eyre::Result;
use tracing::{info, trace};

use polybft_config::Config;

use crate::args::{Args, Commands};
use crate::cmd::init::InitCmd;
use crate::cmd::schedule::ScheduleCmd;
use crate::cmd::update::UpdateCmd;

mod args;
mod cmd;
mod error;
mod file;
mod logging;

pub fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::new();
    let config = args.load_config()?;

    let _guard = logging::init(config.logging.log_level, config.logging.log_format)?;

    trace!("Command-line parameters: {args:?}");

    match &args.command {
        Commands::Init(cmd) => init(&args, config, cmd),
        Commands::Schedule(cmd) => schedule(&args, config, cmd),
        Commands::Update(cmd) => update(&args, config, cmd),
    }
}

fn init(args: &Args, config: Config, cmd: &InitCmd) -> Result<()> {
    cmd.run(
        &args.get_config_file_path()?,
        &args.get_genesis_file_path(&config)?,
        config.logging,
    )?;

    Ok(())
}

fn schedule(args: &Args, config: Config, cmd: &ScheduleCmd) -> Result<()> {
    info!(
        "Loaded configuration from {:?}",
        args.get_config_file_path().unwrap_or_default().display()
    );

    let genesis = args.load_genesis(&config)?;
    cmd.run(genesis, config.schedule)
}

fn update(args: &Args, config: Config, cmd: &UpdateCmd) -> Result<()> {
    let genesis = args.load_genesis(&config)?;
    cmd.run(genesis)
}
