use anyhow::Result;
use clap::{Parser, Subcommand};

use passvault::cli::{
    handle_entry_command, handle_export_command, handle_generate_command, EntryCommands,
    ExportFormat, PassphraseSource,
};
use passvault::config::{paths::VaultPaths, settings::Settings};
use passvault::storage::Storage;

#[derive(Parser)]
#[command(
    name = "passvault",
    version,
    about = "Password vault with per-entry envelope encryption",
    long_about = "passvault keeps each entry's username, password and notes in its own \
                  encrypted envelope. Titles stay searchable; everything else is \
                  decrypted on demand with your passphrase."
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prompt for the passphrase instead of reading PASSVAULT_PASSPHRASE
    #[arg(long, global = true)]
    ask_passphrase: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new vault
    Init,

    /// Show current configuration and paths
    Config,

    #[command(flatten)]
    Entry(EntryCommands),

    /// Generate a random password
    Generate {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Export the vault
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    passvault::logging::init(cli.verbose)?;

    let paths = VaultPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let passphrase = PassphraseSource::new(cli.ask_passphrase);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing passvault at: {}", paths.base_dir().display());
            passvault::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Set PASSVAULT_PASSPHRASE or pass --ask-passphrase to protect your entries.");
            println!("Run 'passvault add <title> --username <name> --generate' to add one.");
        }
        Some(Commands::Config) => {
            println!("passvault Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Vault file:       {}", paths.vault_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  KDF iterations:  {}", settings.crypto.kdf_iterations);
            println!("  Default sort:    {}", settings.default_sort);
            println!("  Password length: {}", settings.generator.length);
            println!("  Entries:         {}", storage.entries.count()?);
        }
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &settings, passphrase, cmd)?;
        }
        Some(Commands::Generate { length }) => {
            handle_generate_command(&settings, length)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        None => {
            println!("passvault - password vault with envelope encryption");
            println!();
            println!("Run 'passvault --help' for usage information.");
        }
    }

    Ok(())
}
