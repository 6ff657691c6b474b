// CLI module for administrative operations requiring database access

pub mod archive;
pub mod catalog;
pub mod migrate;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;

/// Store audit service CLI
#[derive(Parser)]
#[command(name = "storeaudit")]
#[command(about = "Store audit event service and administrative commands", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Run database migrations and exit
    Migrate {
        /// Also create the directory tables (local development only)
        #[arg(long)]
        with_directory: bool,
    },

    /// Functionality / event type catalog maintenance
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Move old events into the archival table
    Archive {
        /// Events strictly before this date (YYYY-MM-DD, canonical time) are moved
        #[arg(long)]
        before: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Add a functionality
    AddFunctionality {
        name: String,
    },

    /// Add an event type under an existing functionality
    AddEventType {
        functionality: String,
        name: String,
    },

    /// Print every functionality with its event types
    List,
}

/// Execute a CLI command that needs the full AppData
///
/// `Serve` and `Migrate` are handled by main.rs before AppData exists.
///
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed
pub async fn execute_command(
    command: Commands,
    app_data: &AppData,
) -> Result<(), Box<dyn std::error::Error>> {
    let audit_db = &app_data.connections.audit;

    match command {
        Commands::Catalog(catalog_cmd) => match catalog_cmd {
            CatalogCommands::AddFunctionality { name } => {
                catalog::add_functionality(&app_data.catalog_store, audit_db, &name).await?;
            }
            CatalogCommands::AddEventType { functionality, name } => {
                catalog::add_event_type(&app_data.catalog_store, audit_db, &functionality, &name).await?;
            }
            CatalogCommands::List => {
                catalog::list_catalog(&app_data.catalog_store, audit_db).await?;
            }
        },
        Commands::Archive { before, yes } => {
            archive::archive_events(&app_data.audit_store, &before, yes).await?;
        }
        Commands::Serve | Commands::Migrate { .. } => {
            return Err("serve and migrate are not AppData commands".into());
        }
    }

    Ok(())
}
