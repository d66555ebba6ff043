//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `contact_manager` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use contact_manager::config::{Cli, Command};
use contact_manager::initialization::init_logger_with;
use contact_manager::{Config, Contact, ContactFetcher, ContactStore};

#[tokio::main]
async fn main() -> Result<()> {
    // CONTACTS_DB_PATH / CONTACTS_API_URL may come from a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli, config).await {
        eprintln!("contact_manager error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let mut store = ContactStore::new();
    store
        .connect(&config.db_path)
        .await
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;
    store.ensure_schema().await?;

    let json = cli.json;
    let result = execute(cli.command, &config, &mut store, json).await;
    store.disconnect().await;
    result
}

async fn execute(
    command: Command,
    config: &Config,
    store: &mut ContactStore,
    json: bool,
) -> Result<()> {
    match command {
        Command::Add(args) => {
            let id = store.add(&args.into_contact(None)).await?;
            println!("Added contact #{id}");
        }
        Command::Get { id } => {
            let contact = store.get(id).await?;
            print_contacts(&[contact], json)?;
        }
        Command::Update { id, contact } => {
            store.update(&contact.into_contact(Some(id))).await?;
            println!("Updated contact #{id}");
        }
        Command::Delete { id } => {
            store.remove(id).await?;
            println!("Deleted contact #{id}");
        }
        Command::List => {
            let contacts = store.list_all().await?;
            print_contacts(&contacts, json)?;
        }
        Command::Search { term } => {
            let contacts = store.search(&term).await?;
            print_contacts(&contacts, json)?;
        }
        Command::Fetch { save } => {
            let fetcher = ContactFetcher::new(config)?;
            let contact = fetcher.fetch_one().await?;
            print_contacts(std::slice::from_ref(&contact), json)?;
            if save {
                let id = store.add(&contact).await?;
                println!("Added contact #{id}");
            }
        }
    }
    Ok(())
}

fn print_contacts(contacts: &[Contact], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(contacts).context("Failed to serialize contacts")?
        );
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts found");
        return Ok(());
    }
    for contact in contacts {
        let id = contact
            .id
            .map(|id| format!("#{id}"))
            .unwrap_or_else(|| "new".to_string());
        println!(
            "{:>6}  {:<28} {:<30} {:<18} {}",
            id,
            contact.full_name(),
            contact.email,
            contact.phone,
            location(contact)
        );
    }
    Ok(())
}

fn location(contact: &Contact) -> String {
    match (contact.city.is_empty(), contact.country.is_empty()) {
        (false, false) => format!("{}, {}", contact.city, contact.country),
        (false, true) => contact.city.clone(),
        (true, false) => contact.country.clone(),
        (true, true) => String::new(),
    }
}
