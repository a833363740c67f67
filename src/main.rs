//! VCF Contacts - command line host.
//!
//! Imports VCF/CSV files into the local contact book and queries it.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vcf_contacts::domain::PhoneNumber;
use vcf_contacts::links::{self, LinkSettings, WhatsAppTarget};
use vcf_contacts::{
    Config, ContactBookService, ContactBookServiceImpl, ContactGroup, GroupRepository,
    JsonFileGroupRepository,
};

#[derive(Parser)]
#[command(
    name = "vcf-contacts",
    about = "Import VCF and CSV contacts into a local contact book",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Store groups in this directory instead of CONTACTS_DATA_DIR
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Import a .vcf or .csv file as a new group
    Import { file: PathBuf },
    /// List stored groups
    Groups,
    /// Show the contacts of one group
    Show { group_id: String },
    /// Search names and phone numbers across all groups
    Search { query: String },
    /// Rename a group
    Rename { group_id: String, name: String },
    /// Delete a group and its contacts
    Delete { group_id: String },
    /// Print dial, SMS and WhatsApp links for a phone number
    Link {
        phone: String,
        /// Country code to use instead of the configured default
        #[arg(long)]
        country_code: Option<String>,
    },
}

#[derive(Serialize)]
struct PhoneLinks {
    dial: String,
    sms: String,
    whatsapp: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }

    // Initialize logging (stderr only so command output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(data_dir = %config.data_dir.display(), "Configuration loaded");

    let repository =
        Arc::new(JsonFileGroupRepository::new(&config.data_dir)) as Arc<dyn GroupRepository>;
    let service = ContactBookServiceImpl::new(repository);

    run(cli, &config, &service).await
}

async fn run(cli: Cli, config: &Config, service: &dyn ContactBookService) -> Result<()> {
    match cli.command {
        Command::Import { file } => {
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| anyhow!("Not a file: {}", file.display()))?;
            let handle = File::open(&file)
                .with_context(|| format!("Failed to open {}", file.display()))?;

            match service
                .import_file(&file_name, Box::new(BufReader::new(handle)))
                .await?
            {
                Some(group) if cli.json => print_json(&group)?,
                Some(group) => println!(
                    "Imported {} contacts into \"{}\" ({})",
                    group.len(),
                    group.name,
                    group.id
                ),
                None => return Err(anyhow!("No contacts could be imported from {}", file_name)),
            }
        }
        Command::Groups => {
            let groups = service.groups().await?;
            if cli.json {
                print_json(&groups)?;
            } else {
                for group in &groups {
                    println!("{}  {} ({} contacts)", group.id, group.name, group.len());
                }
            }
        }
        Command::Show { group_id } => {
            let group = service
                .group(&group_id)
                .await?
                .ok_or_else(|| anyhow!("Group {} not found", group_id))?;
            if cli.json {
                print_json(&group)?;
            } else {
                print_group(&group);
            }
        }
        Command::Search { query } => {
            let groups: Vec<ContactGroup> = service
                .search(&query)
                .await?
                .into_iter()
                .filter(|g| !g.is_empty())
                .collect();
            if cli.json {
                print_json(&groups)?;
            } else {
                groups.iter().for_each(print_group);
            }
        }
        Command::Rename { group_id, name } => {
            let group = service.rename_group(&group_id, &name).await?;
            println!("Renamed {} to \"{}\"", group.id, group.name);
        }
        Command::Delete { group_id } => {
            service.delete_group(&group_id).await?;
            println!("Deleted {}", group_id);
        }
        Command::Link {
            phone,
            country_code,
        } => {
            let number = PhoneNumber::new(phone.as_str())?;
            let whatsapp = match country_code {
                Some(code) => Some(links::whatsapp_url_with_code(&number, &code)),
                None => match links::resolve_whatsapp(&phone, &LinkSettings::from(config))? {
                    WhatsAppTarget::Ready(url) => Some(url),
                    WhatsAppTarget::NeedsCountryCode => None,
                },
            };
            let result = PhoneLinks {
                dial: links::dial_uri(&number),
                sms: links::sms_uri(&number),
                whatsapp,
            };

            if cli.json {
                print_json(&result)?;
            } else {
                println!("dial:     {}", result.dial);
                println!("sms:      {}", result.sms);
                match &result.whatsapp {
                    Some(url) => println!("whatsapp: {}", url),
                    None => println!("whatsapp: country code needed (pass --country-code)"),
                }
            }
        }
    }
    Ok(())
}

fn print_group(group: &ContactGroup) {
    println!("{} ({})", group.name, group.id);
    for contact in &group.contacts {
        println!("  {}  {}", contact.name(), contact.phone_numbers().join(", "));
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
