mod render;

use anyhow::{Context, Result};
use catalog::CatalogIndex;
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{CatalogEngine, EngineConfig, MAX_MIN_RATING};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Cosmetics - browse a cosmetics catalog by text, category and rating
#[derive(Parser)]
#[command(name = "cosmetics")]
#[command(about = "Search and inspect a cosmetics product catalog", long_about = None)]
struct Cli {
    /// Path to a JSON catalog (defaults to the built-in seed catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Query debounce interval in milliseconds (overrides CATALOG_DEBOUNCE_MS)
    #[arg(long)]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching the filters, best rated first
    Search {
        /// Text to find in name, brand, category or ingredient names
        #[arg(long, default_value = "")]
        query: String,

        /// Category to keep ("all" for every category)
        #[arg(long, default_value = "all")]
        category: String,

        /// Minimum average rating, 0 to 4
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=4))]
        min_rating: u8,
    },

    /// List the catalog's categories
    Categories,

    /// Show ingredients and reviews of one product
    Show {
        /// Product ID to display
        #[arg(long)]
        id: String,
    },

    /// Interactive browsing; typed text is applied after the debounce interval
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = match &cli.catalog {
        Some(path) => CatalogIndex::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => CatalogIndex::seed().context("Failed to load the seed catalog")?,
    };
    tracing::debug!("Catalog loaded in {:?}", start.elapsed());

    let mut config = EngineConfig::from_env();
    if let Some(millis) = cli.debounce_ms {
        config = config.with_debounce(Duration::from_millis(millis));
    }
    let mut engine = CatalogEngine::new(Arc::new(index), &config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            query,
            category,
            min_rating,
        } => handle_search(&mut engine, query, &category, min_rating)?,
        Commands::Categories => handle_categories(&engine),
        Commands::Show { id } => handle_show(&mut engine, id),
        Commands::Browse => handle_browse(&mut engine).await?,
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(
    engine: &mut CatalogEngine,
    query: String,
    category: &str,
    min_rating: u8,
) -> Result<()> {
    // No typing session here, so the query applies at once
    engine.set_query(query);
    engine.flush_query();
    engine.select_category(category);
    engine.set_min_rating(min_rating)?;

    print_current(engine)
}

/// Handle the 'categories' command
fn handle_categories(engine: &CatalogEngine) {
    render::print_categories(&engine.categories());
}

/// Handle the 'show' command
fn handle_show(engine: &mut CatalogEngine, id: String) {
    engine.focus(id);
    match engine.focused_detail() {
        Some(detail) => render::print_detail(&detail),
        None => println!("{}", "Nenhum produto selecionado.".yellow()),
    }
}

/// Handle the 'browse' command
///
/// Reads stdin line by line. Plain text edits the query; lines starting
/// with ':' are commands. The list is redrawn whenever the debounced query
/// lands or another filter changes.
async fn handle_browse(engine: &mut CatalogEngine) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut applied = engine.subscribe_query();

    print_help();
    print_current(engine)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match BrowseInput::parse(&line) {
                    BrowseInput::Query(text) => engine.set_query(text),
                    BrowseInput::Category(category) => {
                        engine.select_category(&category);
                        print_current(engine)?;
                    }
                    BrowseInput::MinRating(value) => match engine.set_min_rating(value) {
                        Ok(()) => print_current(engine)?,
                        Err(e) => println!("{}", e.to_string().red()),
                    },
                    BrowseInput::Show(id) => handle_show(engine, id),
                    BrowseInput::Categories => handle_categories(engine),
                    BrowseInput::Help => print_help(),
                    BrowseInput::Invalid(reason) => println!("{}", reason.red()),
                    BrowseInput::Quit => break,
                }
            }
            changed = applied.changed() => {
                if changed.is_err() {
                    break;
                }
                print_current(engine)?;
            }
        }
    }
    Ok(())
}

fn print_current(engine: &CatalogEngine) -> Result<()> {
    let view = engine.view()?;
    render::print_view(&view, engine.category(), engine.min_rating());
    Ok(())
}

fn print_help() {
    println!("{}", "Digite para buscar. Comandos:".bold());
    println!("  :cat NOME   filtra por categoria (:cat all para todas)");
    println!("  :min N      nota mínima de 0 a {}", MAX_MIN_RATING);
    println!("  :show ID    detalhes de um produto");
    println!("  :cats       lista as categorias");
    println!("  :help       esta ajuda");
    println!("  :quit       sair");
}

/// One line of input in browse mode
#[derive(Debug, PartialEq)]
enum BrowseInput {
    Query(String),
    Category(String),
    MinRating(u8),
    Show(String),
    Categories,
    Help,
    Quit,
    Invalid(String),
}

impl BrowseInput {
    fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return BrowseInput::Query(line.to_string());
        };
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim(), ""),
        };
        match name {
            "cat" => BrowseInput::Category(arg.to_string()),
            "min" => match arg.parse::<u8>() {
                Ok(value) => BrowseInput::MinRating(value),
                Err(_) => BrowseInput::Invalid(format!("Nota inválida: {:?}", arg)),
            },
            "show" if !arg.is_empty() => BrowseInput::Show(arg.to_string()),
            "show" => BrowseInput::Invalid("Uso: :show ID".to_string()),
            "cats" => BrowseInput::Categories,
            "help" => BrowseInput::Help,
            "quit" | "q" => BrowseInput::Quit,
            other => BrowseInput::Invalid(format!("Comando desconhecido: :{}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_query() {
        assert_eq!(
            BrowseInput::parse("ácido hialurônico"),
            BrowseInput::Query("ácido hialurônico".to_string())
        );
        assert_eq!(BrowseInput::parse(""), BrowseInput::Query(String::new()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            BrowseInput::parse(":cat Protetor Solar"),
            BrowseInput::Category("Protetor Solar".to_string())
        );
        assert_eq!(BrowseInput::parse(":cat all"), BrowseInput::Category("all".to_string()));
        assert_eq!(BrowseInput::parse(":cat"), BrowseInput::Category(String::new()));
        assert_eq!(BrowseInput::parse(":min 3"), BrowseInput::MinRating(3));
        assert_eq!(BrowseInput::parse(":show p1"), BrowseInput::Show("p1".to_string()));
        assert_eq!(BrowseInput::parse(":quit"), BrowseInput::Quit);
    }

    #[test]
    fn test_invalid_commands() {
        assert!(matches!(BrowseInput::parse(":min high"), BrowseInput::Invalid(_)));
        assert!(matches!(BrowseInput::parse(":show"), BrowseInput::Invalid(_)));
        assert!(matches!(BrowseInput::parse(":dance"), BrowseInput::Invalid(_)));
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from([
            "cosmetics", "search", "--query", "creme", "--category", "Hidratante", "--min-rating", "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { query, category, min_rating } => {
                assert_eq!(query, "creme");
                assert_eq!(category, "Hidratante");
                assert_eq!(min_rating, 4);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_cli_rejects_rating_above_four() {
        assert!(Cli::try_parse_from(["cosmetics", "search", "--min-rating", "5"]).is_err());
    }
}
