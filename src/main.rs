use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use tourguide::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use tourguide::engine::{self, EngineError};
use tourguide::models::{AppState, Lang, ProjectedSite};
use tourguide::routes::build_router;
use tourguide::services::{load_catalog, CatalogSource};
use tourguide::utils::{cell_text, coordinates_text, parse_name_list};

async fn build_state_from_env(env_file: Option<&str>, data_file: Option<String>) -> AppState {
    config::load_env_file(env_file);
    let source = match data_file {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::from_env(),
    };
    let catalog = match load_catalog(&source).await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, %source, "Failed to load catalog");
            eprintln!("{} {}: {}", yansi::Paint::red("Failed to load catalog from"), source, e);
            process::exit(1);
        }
    };
    AppState::new(catalog, config::get_region_cap(), config::get_recommend_count())
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting tourguide server");
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_sites(sites: &[ProjectedSite]) {
    if sites.is_empty() {
        println!("(empty list)");
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Entry fee", "Coordinates", "Photo"]);
    for site in sites {
        table.add_row(vec![
            site.site_id.to_string(),
            site.name().unwrap_or_default().to_string(),
            cell_text(&site.entry_fee, 24),
            coordinates_text(&site.location),
            cell_text(&site.photo_url, 40),
        ]);
    }
    println!("\n{table}\n");
}

fn parse_lang_or_exit(raw: &str) -> Lang {
    match raw.parse::<Lang>() {
        Ok(lang) => lang,
        Err(e) => {
            eprintln!("{}", yansi::Paint::new(e.to_string()).red());
            process::exit(2);
        }
    }
}

fn names_or_exit(raw: &[String]) -> Vec<String> {
    let names = parse_name_list(raw);
    if names.is_empty() {
        eprintln!("{}", yansi::Paint::new("At least one place name is required").red());
        process::exit(2);
    }
    names
}

fn report_engine_error(e: EngineError) -> ! {
    match &e {
        EngineError::NotFound(_) => eprintln!("{}", yansi::Paint::new(e.to_string()).yellow()),
        _ => eprintln!("{}", yansi::Paint::new(e.to_string()).red()),
    }
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "tourguide",
    author,
    version,
    about = "Tourist site recommendations by governorate",
    long_about = r#"tourguide — suggest tourist sites from a bilingual (English/Arabic) catalog.

Serve the JSON API, or query the catalog directly from the terminal. The catalog is read from DATA_FILE (default data.json) or, when CATALOG_API_URL is set, from a remote document store.

Examples:
  1) Run the API:
      tourguide serve --host 0.0.0.0 --port 8000
  2) Sites in the same governorates as the ones you know:
      tourguide places --lang en "Pyramids of Giza,Cairo Tower"
  3) Closest matches by name:
      tourguide recommend --lang ar --count 3 "Karnak"
"#,
    after_help = "Use `tourguide <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable catalog store request logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Read the catalog from this JSON file instead of the configured source
    #[arg(long, global = true)]
    data_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Load the catalog and report its size
    #[command(about = "Validate configuration by loading the catalog.", long_about = "Load the catalog from the configured source and print the number of governorates and sites. Exits non-zero if the catalog cannot be loaded.")]
    CheckConfig,
    /// List every site name in the catalog
    Names {
        /// Response language (en or ar)
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Recommend sites whose names are closest to the given ones
    Recommend {
        /// Response language (en or ar)
        #[arg(long, default_value = "en")]
        lang: String,
        /// Number of sites to return
        #[arg(long)]
        count: Option<usize>,
        /// English site names (comma-separated or repeated)
        #[arg(value_name = "NAMES", required = true)]
        names: Vec<String>,
    },
    /// Show sites located in the same governorates as the given ones
    Places {
        /// Language of the given names and of the output (en or ar)
        #[arg(long, default_value = "en")]
        lang: String,
        /// Site names (comma-separated or repeated)
        #[arg(value_name = "NAMES", required = true)]
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        tourguide::api::set_silent(true);
    }

    let env_file = cli.env_file.as_deref();
    let state = build_state_from_env(env_file, cli.data_file.clone()).await;

    match cli.command.unwrap_or(Commands::Serve {
        host: DEFAULT_HOST.to_string(),
        port: DEFAULT_PORT,
    }) {
        Commands::Serve { host, port } => {
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig => {
            if state.catalog.is_empty() {
                eprintln!("{}", yansi::Paint::new("Catalog loaded but contains no sites").yellow());
                process::exit(1);
            }
            println!(
                "{} ({} governorates, {} sites)",
                yansi::Paint::new("Catalog looks valid").green(),
                state.catalog.region_names().len(),
                state.catalog.len()
            );
        }
        Commands::Names { lang } => {
            let lang = parse_lang_or_exit(&lang);
            let names = engine::list_all_names(&state.catalog, lang);
            let mut table = new_table();
            table.set_header(vec!["Site name"]);
            for name in &names {
                table.add_row(vec![name]);
            }
            println!("\n{table}\n");
        }
        Commands::Recommend { lang, count, names } => {
            let lang = parse_lang_or_exit(&lang);
            let names = names_or_exit(&names);
            let count = count.unwrap_or(state.recommend_count);
            match engine::recommend(&state.catalog, &names, count, lang) {
                Ok(sites) if sites.is_empty() => {
                    eprintln!("{}", yansi::Paint::new("No data available for recommendations.").yellow());
                    process::exit(1);
                }
                Ok(sites) => print_sites(&sites),
                Err(e) => report_engine_error(e),
            }
        }
        Commands::Places { lang, names } => {
            let lang = parse_lang_or_exit(&lang);
            let names = names_or_exit(&names);
            match engine::sites_by_region(&state.catalog, &names, lang, state.region_cap, &mut rand::thread_rng()) {
                Ok(found) => {
                    println!(
                        "{} {} {}",
                        yansi::Paint::new(found.number_of_places).cyan(),
                        yansi::Paint::new("places from").green(),
                        yansi::Paint::new(format!("{} governorate(s)", found.matched_regions)).cyan()
                    );
                    print_sites(&found.sites);
                }
                Err(e) => report_engine_error(e),
            }
        }
    }
}
