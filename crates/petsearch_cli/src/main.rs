//! Command-line transport for the pet query API.
//!
//! # Responsibility
//! - Decode a query from the command line and print the encoded result.
//! - Wire store, service and schema once per process.

mod cli;

use anyhow::{bail, Context, Result};
use async_graphql::{Request, Variables};
use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use petsearch_core::{
    core_version, default_log_level, init_logging, open_db, Pet, PetServiceError,
    SqlitePetRepository,
};
use petsearch_graphql::{build_schema, schema_sdl, shared_service, SharedPetService};
use std::path::Path;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Query {
            document,
            variables,
        } => {
            let schema = build_schema(open_service(cli.db.as_deref())?);
            let mut request = Request::new(document);
            if let Some(raw) = variables {
                let json = serde_json::from_str(&raw).context("--variables must be valid JSON")?;
                request = request.variables(Variables::from_json(json));
            }

            let response = schema.execute(request).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Breed { text } => {
            let service = open_service(cli.db.as_deref())?;
            let pets = run_lookup(move || service.get_pets_by_breed(Some(text.as_str()))).await?;
            println!("{}", serde_json::to_string_pretty(&pets)?);
        }
        Commands::Location { text } => {
            let service = open_service(cli.db.as_deref())?;
            let pets =
                run_lookup(move || service.get_pets_by_location(Some(text.as_str()))).await?;
            println!("{}", serde_json::to_string_pretty(&pets)?);
        }
        Commands::Sdl => print!("{}", schema_sdl()),
        Commands::Version => println!("petsearch_core version={}", core_version()),
    }

    Ok(ExitCode::SUCCESS)
}

// Store queries block, so they run on tokio's blocking pool.
async fn run_lookup<F>(lookup: F) -> Result<Vec<Pet>>
where
    F: FnOnce() -> Result<Vec<Pet>, PetServiceError> + Send + 'static,
{
    let pets = tokio::task::spawn_blocking(lookup)
        .await
        .context("lookup task failed")??;
    Ok(pets)
}

fn open_service(db: Option<&Path>) -> Result<SharedPetService> {
    let Some(path) = db else {
        bail!("no store configured; pass --db or set PETSEARCH_DB");
    };
    let store = open_db(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    info!("event=service_ready module=cli status=ok");
    Ok(shared_service(SqlitePetRepository::new(store)))
}
