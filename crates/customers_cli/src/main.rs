//! Command-line front end for the customer core.
//!
//! # Responsibility
//! - Build a `CoreConfig` from arguments and environment.
//! - Drive the `/v1/customers` transport mapping and print its response.
//!
//! # Invariants
//! - Exit status is non-zero for any non-2xx response or setup failure.

use clap::{Args, Parser, Subcommand};
use customers_core::{
    core_version, default_log_level, handle_request, init_logging, ping, ApiResponse, CoreConfig,
    CustomerInput, CustomerService, LoggingConfig, SqliteCustomerRepository, StorageLocation,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "customers", version, about = "Manage customer records")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "CUSTOMERS_DB", default_value = "customers.sqlite3")]
    db: PathBuf,

    /// Use a throwaway in-memory database instead of `--db`.
    #[arg(long)]
    memory: bool,

    /// trace|debug|info|warn|error
    #[arg(long, env = "CUSTOMERS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted).
    #[arg(long, env = "CUSTOMERS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core linkage and version.
    Ping,
    /// GET /v1/customers/{id}
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// POST /v1/customers
    Create(CustomerFields),
    /// PUT /v1/customers/{id}
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[command(flatten)]
        fields: CustomerFields,
    },
    /// DELETE /v1/customers/{id}
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Send a raw request, e.g. `request PUT /v1/customers/1 '{...}'`.
    Request {
        method: String,
        path: String,
        body: Option<String>,
    },
}

#[derive(Debug, Args)]
struct CustomerFields {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
}

impl CustomerFields {
    fn to_body(&self) -> Result<String, String> {
        let input = CustomerInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        };
        serde_json::to_string(&input).map_err(|err| format!("failed to encode request body: {err}"))
    }
}

impl Cli {
    fn core_config(&self) -> CoreConfig {
        let storage = if self.memory {
            StorageLocation::Memory
        } else {
            StorageLocation::File(self.db.clone())
        };
        CoreConfig {
            storage,
            logging: LoggingConfig {
                level: self
                    .log_level
                    .clone()
                    .unwrap_or_else(|| default_log_level().to_string()),
                log_dir: self.log_dir.clone(),
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::Ping = cli.command {
        // No storage or logging needed to probe core linkage.
        println!("customers_core ping={}", ping());
        println!("customers_core version={}", core_version());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(response) => {
            print_response(&response);
            if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ApiResponse, String> {
    let config = cli.core_config();
    init_logging(&config.logging)?;

    let conn = config
        .open_connection()
        .map_err(|err| format!("failed to open database: {err}"))?;
    let repo = SqliteCustomerRepository::try_new(&conn)
        .map_err(|err| format!("failed to prepare repository: {err}"))?;
    let service = CustomerService::new(repo);

    let response = match &cli.command {
        Command::Ping => ApiResponse::text(200, ping()),
        Command::Get { id } => handle_request(&service, "GET", &item_path(*id), None),
        Command::Create(fields) => {
            let body = fields.to_body()?;
            handle_request(&service, "POST", "/v1/customers", Some(&body))
        }
        Command::Update { id, fields } => {
            let body = fields.to_body()?;
            handle_request(&service, "PUT", &item_path(*id), Some(&body))
        }
        Command::Delete { id } => handle_request(&service, "DELETE", &item_path(*id), None),
        Command::Request { method, path, body } => {
            handle_request(&service, method, path, body.as_deref())
        }
    };
    log::debug!(
        "event=cli_request module=cli status=done http_status={}",
        response.status
    );
    Ok(response)
}

fn item_path(id: i64) -> String {
    format!("/v1/customers/{id}")
}

fn print_response(response: &ApiResponse) {
    println!("{}", response.status);
    if !response.body.is_empty() {
        println!("{}", response.body);
    }
}
