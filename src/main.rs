use clap::Parser;
use passvault::cli::{Cli, Commands};
use passvault::errors::PassVaultError;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref path,
            credential,
            note,
        } => passvault::cli::commands::add::execute(&cli, path, credential, note),
        Commands::Show { ref path } => {
            passvault::cli::commands::show::execute(&cli, path.as_deref())
        }
        Commands::Update { ref path } => passvault::cli::commands::update::execute(&cli, path),
        Commands::Delete { ref path, force } => {
            passvault::cli::commands::delete::execute(&cli, path, force)
        }
        Commands::Completions { ref shell } => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        // A cancelled prompt is a quiet exit, not an error report.
        if !matches!(e, PassVaultError::UserCancelled) {
            passvault::cli::output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
