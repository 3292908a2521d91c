use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_SEARCH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the report as plain text (default if no subcommand)
    Print,
    /// Serve the report as HTML on every request
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "pr-report")]
#[command(about = "Weekly pull request report for a watch-list of GitHub repositories", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pr-report/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Log to stderr; RUST_LOG wins over the verbosity flag
fn init_logging(verbose: bool, serving: bool) {
    let default_level = if verbose {
        "debug"
    } else if serving {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Print);
    init_logging(cli.verbose, matches!(command, Commands::Serve { .. }));

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match pr_report::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let settings = match pr_report::config::validate_config(&config) {
        Ok(s) => s,
        Err(errors) => {
            eprintln!("Config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };

    tracing::debug!(
        repositories = settings.repositories.len(),
        window_days = settings.window_days,
        "loaded config"
    );

    let token = pr_report::credentials::get_token_from_env();
    if token.is_none() {
        tracing::info!(
            "{} not set, using anonymous GitHub access",
            pr_report::credentials::ENV_TOKEN_VAR
        );
    }

    let client = match pr_report::github::create_client(token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create GitHub client: {:#}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    match command {
        Commands::Print => {
            let start_time = Instant::now();
            let window = pr_report::report::ReportWindow::trailing(settings.window_days);

            let report = match pr_report::report::build_report(
                &client,
                &settings.repositories,
                window,
            )
            .await
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Search failed: {}", e);
                    if e.is_transient() {
                        eprintln!("This is usually temporary. Try again in a few minutes.");
                    }
                    std::process::exit(EXIT_SEARCH);
                }
            };

            print!("{}", pr_report::output::format_plain(&report));
            tracing::debug!("Report built in {:?}", start_time.elapsed());
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(settings.port);
            let state = pr_report::server::ReportState {
                client,
                repositories: settings.repositories,
                window_days: settings.window_days,
                today: pr_report::report::window::today_utc,
            };

            if let Err(e) = pr_report::server::serve(state, port).await {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_NETWORK);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
