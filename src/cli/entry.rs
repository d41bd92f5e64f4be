//! Entry CLI commands
//!
//! Implements the add, edit, show, delete and list commands.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_entry_details, format_entry_list};
use crate::error::VaultResult;
use crate::generator::generate_password;
use crate::index::SortOrder;
use crate::models::EntryDraft;
use crate::services::EntryService;
use crate::storage::Storage;

use super::passphrase::PassphraseSource;

/// Entry commands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add a new entry
    Add {
        /// Entry title
        title: String,
        /// Account username
        #[arg(short, long)]
        username: Option<String>,
        /// Account password
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Generate a random password instead of supplying one
        #[arg(short, long)]
        generate: bool,
        /// Length of the generated password
        #[arg(short, long, requires = "generate")]
        length: Option<usize>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Edit an existing entry
    Edit {
        /// Entry title or ID
        entry: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New username
        #[arg(short, long)]
        username: Option<String>,
        /// New password
        #[arg(short, long)]
        password: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show entry details
    Show {
        /// Entry title or ID
        entry: String,
        /// Decrypt and print the username, password and notes
        #[arg(short, long)]
        reveal: bool,
    },
    /// Delete an entry
    Delete {
        /// Entry title or ID
        entry: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List entries
    List {
        /// Case-insensitive search across title, username and notes
        #[arg(short, long, default_value = "")]
        query: String,
        /// Sort order as field:direction, e.g. title:asc
        #[arg(short, long)]
        sort: Option<SortOrder>,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    passphrase: PassphraseSource,
    cmd: EntryCommands,
) -> VaultResult<()> {
    let codec = settings.codec();
    let service = EntryService::new(storage, &codec);

    match cmd {
        EntryCommands::Add {
            title,
            username,
            password,
            generate,
            length,
            notes,
        } => {
            let password = if generate {
                let generated =
                    generate_password(length.unwrap_or(settings.generator.length))?;
                println!("Generated password: {}", generated);
                generated
            } else {
                password.unwrap_or_default()
            };

            let draft = EntryDraft::new(title, username.unwrap_or_default(), password)
                .with_notes(notes.unwrap_or_default());

            let entry = service.create(draft, &passphrase.resolve()?)?;
            println!("Created entry: {} ({})", entry.title, entry.id);
        }

        EntryCommands::Edit {
            entry,
            title,
            username,
            password,
            notes,
        } => {
            let target = service.require(&entry)?;

            if title.is_none() && username.is_none() && password.is_none() && notes.is_none() {
                println!("No changes specified. Use --title, --username, --password, or --notes.");
                return Ok(());
            }

            let passphrase = passphrase.resolve()?;
            let mut draft = service.draft_from(target.id, &passphrase)?;
            for (slot, value) in [
                (&mut draft.title, title),
                (&mut draft.username, username),
                (&mut draft.password, password),
                (&mut draft.notes, notes),
            ] {
                if let Some(value) = value {
                    *slot = value;
                }
            }

            let updated = service.update(target.id, draft, &passphrase)?;
            println!("Updated entry: {} ({})", updated.title, updated.id);
        }

        EntryCommands::Show { entry, reveal } => {
            let target = service.require(&entry)?;

            if reveal {
                let (target, record) = service.reveal(target.id, &passphrase.resolve()?)?;
                print!("{}", format_entry_details(&target, Some(&record)));
            } else {
                print!("{}", format_entry_details(&target, None));
            }
        }

        EntryCommands::Delete { entry, force } => {
            let target = service.require(&entry)?;

            if !force {
                println!("About to delete entry: {} ({})", target.title, target.id);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(target.id)?;
            println!("Deleted entry: {}", deleted.title);
        }

        EntryCommands::List { query, sort } => {
            let order = sort.unwrap_or(settings.default_sort);
            let entries = service.list(&query, order, &passphrase.resolve()?)?;
            print!("{}", format_entry_list(&entries));
        }
    }

    Ok(())
}
