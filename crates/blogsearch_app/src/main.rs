mod cli;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::CliArgs::parse();
    platform::logging::initialize(args.log_level, args.log_file.as_deref());

    // Everything runs on one thread; the dataset load is the only await point.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(platform::run(args.command))
}
