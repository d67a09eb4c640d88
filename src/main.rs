use anyhow::Result;
use clap::Parser;
use sitterview::cli::{
    configure_color, handle_pets_command, handle_sitters_command, init_logging, Cli, Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    let use_color = configure_color(cli.plain);

    match cli.command {
        Commands::Sitters(args) => handle_sitters_command(args, use_color),
        Commands::Pets(args) => handle_pets_command(args, use_color),
    }
}
