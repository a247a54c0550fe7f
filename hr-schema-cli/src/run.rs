use crate::{Args, Command, Settings};
use anyhow::Context;
use blockscout_service_launcher::database;
use hr_schema_logic::{self as logic, SchemaError};
use migration::{tables, Catalog, Migrator};
use sea_orm::DatabaseConnection;

pub async fn run(args: Args, settings: Settings) -> Result<(), anyhow::Error> {
    let command = args.command;
    if !command.needs_database() {
        return run_offline(command);
    }

    let db = connect(&settings).await?;
    tracing::info!(command = ?command, "connected to database");
    run_online(&db, command).await
}

async fn run_online(db: &DatabaseConnection, command: Command) -> Result<(), anyhow::Error> {
    match command {
        Command::Up { steps } => logic::up(db, steps).await?,
        Command::Down { steps } => logic::down(db, Some(steps)).await?,
        Command::Fresh => logic::fresh(db).await?,
        Command::Reset => logic::reset(db).await?,
        Command::Status { json } => {
            let status = logic::migration_status(db).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                for migration in status {
                    println!("{migration}");
                }
            }
        }
        Command::Verify { json } => match logic::verify(db, &Catalog::hr()).await {
            Ok(()) => {
                if json {
                    let diff = logic::SchemaDiff::default();
                    println!("{}", serde_json::to_string_pretty(&diff)?);
                } else {
                    println!("schema matches the catalog");
                }
            }
            Err(SchemaError::Drift(diff)) if json => {
                println!("{}", serde_json::to_string_pretty(&diff)?);
                anyhow::bail!("schema drift detected: {} differences", diff.len());
            }
            Err(err) => return Err(err.into()),
        },
        other => anyhow::bail!("command {other:?} does not use the database"),
    }
    Ok(())
}

fn run_offline(command: Command) -> Result<(), anyhow::Error> {
    let catalog = Catalog::hr();
    match command {
        Command::Script { down } => {
            let statements = if down {
                logic::render_down(&catalog)
            } else {
                logic::render_up(&catalog)?
            };
            print!("{}", logic::to_script(&statements));
        }
        Command::Tables { domain } => {
            let domains = tables::domains();
            if let Some(domain) = &domain {
                if !domains.iter().any(|(name, _)| name == domain) {
                    let known: Vec<_> = domains.iter().map(|(name, _)| *name).collect();
                    anyhow::bail!(
                        "unknown domain '{domain}', expected one of: {}",
                        known.join(", ")
                    );
                }
            }
            for (name, tables) in domains {
                if domain.as_deref().is_some_and(|domain| domain != name) {
                    continue;
                }
                for table in tables {
                    println!("{name}\t{}\t{} columns", table.name, table.fields.len());
                }
            }
        }
        other => anyhow::bail!("command {other:?} needs a database connection"),
    }
    Ok(())
}

async fn connect(settings: &Settings) -> Result<DatabaseConnection, anyhow::Error> {
    let mut database_settings = settings
        .database
        .clone()
        .context("database settings are missing, set HR_SCHEMA__DATABASE__CONNECT__URL")?;
    // migrations are applied by the commands themselves
    database_settings.run_migrations = false;
    database::initialize_postgres::<Migrator>(&database_settings).await
}
