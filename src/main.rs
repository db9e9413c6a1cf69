use clap::Parser;
use seedlock::cli::{AuthAction, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { show } => seedlock::cli::commands::generate::execute(show),
        Commands::Seal { show, force } => seedlock::cli::commands::seal::execute(&cli, show, force),
        Commands::Open { show, copy } => seedlock::cli::commands::open::execute(&cli, show, copy),
        Commands::Inspect => seedlock::cli::commands::inspect::execute(&cli),
        Commands::Auth { ref action } => match action {
            AuthAction::KeyfileGenerate { ref path } => {
                seedlock::cli::commands::auth::execute_keyfile_generate(&cli, path.as_deref())
            }
            AuthAction::Keyring { delete } => {
                seedlock::cli::commands::auth::execute_keyring(&cli, *delete)
            }
        },
        Commands::Version => seedlock::cli::commands::version::execute(),
        Commands::Completions { ref shell } => seedlock::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        seedlock::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
