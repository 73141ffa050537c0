use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use marquee::Database;
use marquee::cli::{Cli, Commands, ConfigCommands};
use marquee::commands::{
    cmd_browse, cmd_config_init, cmd_config_path, cmd_config_show, cmd_list, cmd_refresh,
    cmd_show,
};
use marquee::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The browser owns the terminal and logs to a file instead
    if !matches!(cli.command, None | Some(Commands::Browse { .. })) {
        logging::init_stderr();
    }

    match cli.command {
        None => {
            let db = Database::open()?;
            cmd_browse(&db, "/", None)
        }
        Some(Commands::Browse { path, offline }) => {
            let db = Database::open()?;
            cmd_browse(&db, &path, offline)
        }
        Some(Commands::List {
            page,
            refresh,
            offline,
        }) => {
            let db = Database::open()?;
            cmd_list(&db, page, refresh, offline)
        }
        Some(Commands::Show { id, offline }) => {
            let db = Database::open()?;
            cmd_show(&db, &id, offline)
        }
        Some(Commands::Refresh) => {
            let db = Database::open()?;
            cmd_refresh(&db)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(),
            ConfigCommands::Path => cmd_config_path(),
            ConfigCommands::Init { force } => cmd_config_init(force),
        },
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "marquee", &mut std::io::stdout());
            Ok(())
        }
    }
}
