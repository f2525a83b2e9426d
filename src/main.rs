use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pagination_engine::config::Config;
use pagination_engine::error::AppError;
use pagination_engine::{DEFAULT_MAX_VISIBLE, PaginationOptions, Paginator};

#[derive(Parser)]
#[command(
    name = "pagination-engine",
    version,
    about = "Pagination metadata, page windows and links"
)]
struct Cli {
    /// Path to config file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Slice newline-separated items from a file or stdin into one page
    Paginate {
        #[command(flatten)]
        request: RequestArgs,
        /// Read items from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Pagination metadata for a known item count
    Meta {
        #[command(flatten)]
        request: RequestArgs,
        #[arg(long)]
        total: u64,
    },
    /// Offset and limit for a database query
    Query {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Page numbers for a pagination bar
    Pages {
        #[arg(long)]
        current: u64,
        #[arg(long)]
        total_pages: u64,
        #[arg(long, default_value_t = DEFAULT_MAX_VISIBLE)]
        max_visible: u64,
    },
    /// First/last/next/prev links for a list endpoint
    Links {
        #[arg(long)]
        base_url: String,
        #[command(flatten)]
        request: RequestArgs,
        #[arg(long)]
        total: u64,
        /// Extra query parameter carried on every link, as key=value
        #[arg(long = "param")]
        params: Vec<String>,
    },
    /// Check a request against the configured bounds
    Validate {
        #[command(flatten)]
        request: RequestArgs,
        /// Raw query string, e.g. "page=2&limit=10"
        #[arg(long, conflicts_with_all = ["page", "limit"])]
        query: Option<String>,
    },
    /// Print the effective pagination config
    Config,
}

#[derive(Args)]
struct RequestArgs {
    #[arg(long, allow_hyphen_values = true)]
    page: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<f64>,
}

impl From<RequestArgs> for PaginationOptions {
    fn from(args: RequestArgs) -> Self {
        Self {
            page: args.page,
            limit: args.limit,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error loading config: {e}");
        std::process::exit(1);
    });

    let filter = EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command, &Paginator::new(config.pagination)) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

fn run(command: Command, paginator: &Paginator) -> Result<(), AppError> {
    match command {
        Command::Paginate { request, input } => {
            let items = read_items(input)?;
            print_json(&paginator.paginate(&items, &request.into()))
        }
        Command::Meta { request, total } => {
            print_json(&paginator.create_meta(&request.into(), total))
        }
        Command::Query { request } => print_json(&paginator.query_options(&request.into())),
        Command::Pages {
            current,
            total_pages,
            max_visible,
        } => print_json(&paginator.page_numbers(current, total_pages, max_visible)),
        Command::Links {
            base_url,
            request,
            total,
            params,
        } => {
            let params = params
                .iter()
                .map(|p| parse_param(p))
                .collect::<Result<Vec<_>, _>>()?;
            let meta = paginator.create_meta(&request.into(), total);
            print_json(&paginator.create_links(&base_url, &meta, params))
        }
        Command::Validate { request, query } => {
            let report = match query {
                Some(query) => paginator.validate_query(&query),
                None => paginator.validate(&request.into()),
            };
            print_json(&report)
        }
        Command::Config => print_json(&paginator.config()),
    }
}

fn read_items(input: Option<PathBuf>) -> Result<Vec<String>, AppError> {
    let lines: std::io::Result<Vec<String>> = match input {
        Some(path) => BufReader::new(std::fs::File::open(path)?).lines().collect(),
        None => std::io::stdin().lock().lines().collect(),
    };
    Ok(lines?)
}

fn parse_param(raw: &str) -> Result<(&str, &str), AppError> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| AppError::InvalidParam(raw.to_string()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
