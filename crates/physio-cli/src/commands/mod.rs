//! Command handlers. Each one drives [`App`] and prints the result.

pub mod auth;
pub mod clinician;
pub mod config;
pub mod patient;

use eyre::Result;
use physio_protocols::all_protocols;

use crate::app::App;
use crate::cli::{Cli, Commands};

pub async fn dispatch(cli: Cli) -> Result<()> {
    // Config commands must work even when the stored config is broken.
    if let Commands::Config { action } = cli.command {
        return config::handle(action);
    }
    if let Commands::Protocols = cli.command {
        print_protocols();
        return Ok(());
    }

    let config = crate::config::load_config()?;
    let mut app = App::open(&config).await?;

    match cli.command {
        Commands::Register(args) => auth::register(&mut app, args).await,
        Commands::Login(args) => auth::login(&mut app, &args.license).await,
        Commands::Logout => auth::logout(&mut app).await,
        Commands::Whoami => auth::whoami(&app),
        Commands::Patient { action } => patient::handle(&mut app, action).await,
        Commands::Clinician { action } => clinician::handle(&mut app, action).await,
        Commands::Reset { yes } => {
            if !yes {
                eyre::bail!("this deletes every stored patient; pass --yes to confirm");
            }
            app.reset_storage().await?;
            println!("Stored data cleared.");
            Ok(())
        }
        Commands::Config { .. } | Commands::Protocols => Ok(()),
    }
}

fn print_protocols() {
    for protocol in all_protocols() {
        let profile = protocol.profile();
        println!("{}  {}", protocol.id(), protocol.name());
        println!("    {}", profile.description);
        println!("    typical recovery: {} weeks", profile.typical_recovery_weeks);
        println!("    weekly ROM benchmarks: {:?}", protocol.benchmarks());
        for exercise in protocol.exercises() {
            println!(
                "    - {} ({} reps, target {}°)",
                exercise.name, exercise.target_reps, exercise.target_rom
            );
        }
    }
}
