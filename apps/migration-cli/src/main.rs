use clap::{Parser, ValueEnum};
use migration::{get_latest_migration_version, migrate, MigrationCommand};
use reversi_backend::infra::db::connect_db;
use reversi_backend::{telemetry, DbKind, DbProfile};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

/// In-memory SQLite is not offered: the schema would vanish with the process.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Reversi lobby database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,

    /// Emit JSON log lines, filtered by RUST_LOG, like the engine's host
    #[arg(long)]
    json_logs: bool,
}

fn init_logging(json: bool) {
    if json {
        telemetry::init_tracing();
        return;
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.json_logs);

    let profile = match args.env {
        Env::Prod => DbProfile::Prod,
        Env::Test => DbProfile::Test,
    };

    let kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    let conn = match connect_db(profile, kind).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }

    match get_latest_migration_version(&conn).await {
        Ok(Some(version)) => tracing::info!(%version, "schema version"),
        Ok(None) => tracing::info!("no migrations applied"),
        Err(e) => tracing::warn!(error = %e, "could not read schema version"),
    }
}
