//! Pantry Match - Binary Entry Point
//!
//! Thin glue around the library: parses input, runs the catalog matcher
//! and the generative provider, prints both.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pantry_match::report::{render_matches, DEFAULT_DISPLAY_LIMIT};
use pantry_match::{
    CatalogError, DisabledProvider, HttpRecommendationProvider, MatchQuery, MatchingEngine,
    ProviderConfig, RecipeCatalog, RecommendationProvider, RecommendationRequest,
};

#[derive(Debug, Parser)]
#[command(name = "pantry-match", version, about = "Find dishes you can cook with what you have")]
struct Cli {
    /// Recipe catalog TOML file (defaults to the built-in catalog)
    #[arg(long, env = "PANTRY_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prompt for ingredients and preferences until you quit
    Interactive {
        /// Skip the generative provider
        #[arg(long)]
        offline: bool,
    },
    /// Run the built-in demo scenarios
    Demo {
        /// Skip the generative provider
        #[arg(long)]
        offline: bool,
    },
    /// Match once against the catalog and exit
    Match {
        /// Comma-separated ingredients
        #[arg(short, long)]
        ingredients: String,

        /// Cuisine filter ("any" for none)
        #[arg(short, long, default_value = "any")]
        cuisine: String,

        /// Dietary filter ("none" for none)
        #[arg(short, long, default_value = "none")]
        dietary: String,

        /// Meal type (informational)
        #[arg(short, long)]
        meal: Option<String>,

        /// Maximum matches to print (at least 1)
        #[arg(short, long, default_value_t = DEFAULT_DISPLAY_LIMIT, value_parser = parse_limit)]
        limit: usize,
    },
}

/// Demo inputs: (ingredients, dietary, cuisine, meal)
const DEMOS: [(&str, &str, &str, &str); 4] = [
    ("chicken, rice, onions, garlic, tomatoes, olive oil", "none", "Mediterranean", "dinner"),
    ("eggs, bread, cheese, spinach, mushrooms", "vegetarian", "any", "breakfast"),
    ("pasta, tomatoes, basil, garlic, olive oil, mozzarella", "vegetarian", "Italian", "lunch"),
    ("tofu, soy sauce, rice, broccoli, carrots, ginger", "vegan", "Asian", "dinner"),
];

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

const INGREDIENTS_PROMPT: &str = "\nEnter your available ingredients (comma-separated): ";
const DIETARY_PROMPT: &str = "Any dietary restrictions? (vegetarian/vegan/gluten-free/none): ";
const CUISINE_PROMPT: &str = "Preferred cuisine? (Italian/Asian/Mexican/Mediterranean/any): ";
const MEAL_PROMPT: &str = "Meal type? (breakfast/lunch/dinner/snack/any): ";
const AGAIN_PROMPT: &str = "\n\nWould you like another recommendation? (yes/no): ";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match load_catalog(cli.catalog.as_ref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let engine = MatchingEngine::new(&catalog);

    let outcome = match cli.command.unwrap_or(Command::Interactive { offline: false }) {
        Command::Interactive { offline } => run_interactive(&engine, provider(offline).as_ref()),
        Command::Demo { offline } => {
            run_demo(&engine, provider(offline).as_ref());
            Ok(())
        }
        Command::Match { ingredients, cuisine, dietary, meal, limit } => {
            let query = MatchQuery::from_line(&ingredients)
                .with_cuisine(Some(cuisine.as_str()))
                .with_dietary(Some(dietary.as_str()))
                .with_meal_type(meal.as_deref());
            print_catalog_matches(&engine, &query, limit);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<RecipeCatalog, CatalogError> {
    let catalog = match path {
        Some(path) => RecipeCatalog::load(path)?,
        None => RecipeCatalog::builtin()?,
    };
    info!(
        recipes = catalog.len(),
        fingerprint = %catalog.fingerprint_hex(),
        "recipe catalog ready"
    );
    Ok(catalog)
}

fn provider(offline: bool) -> Box<dyn RecommendationProvider> {
    if offline {
        return Box::new(DisabledProvider);
    }
    match HttpRecommendationProvider::new(ProviderConfig::from_env()) {
        Ok(provider) => Box::new(provider),
        Err(e) => {
            warn!(error = %e, "generative provider unavailable");
            Box::new(DisabledProvider)
        }
    }
}

// ============================================================================
// Modes
// ============================================================================

fn run_interactive(
    engine: &MatchingEngine<'_>,
    provider: &dyn RecommendationProvider,
) -> io::Result<()> {
    println!("\n=== Pantry Match: Food Recommendations ===\n");
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n--- New Recommendation Request ---");

        let Some(ingredients) = prompt(&mut input, INGREDIENTS_PROMPT)? else {
            break;
        };
        if QUIT_WORDS.iter().any(|w| ingredients.eq_ignore_ascii_case(w)) {
            break;
        }

        let dietary = prompt(&mut input, DIETARY_PROMPT)?;
        let cuisine = prompt(&mut input, CUISINE_PROMPT)?;
        let meal = prompt(&mut input, MEAL_PROMPT)?;

        let query = MatchQuery::from_line(&ingredients)
            .with_dietary(dietary.as_deref())
            .with_cuisine(cuisine.as_deref())
            .with_meal_type(meal.as_deref());

        println!("\nAnalyzing ingredients and generating recommendations...\n");
        print_generated(provider, &RecommendationRequest::from_query(&query));
        print_catalog_matches(engine, &query, DEFAULT_DISPLAY_LIMIT);

        let again = prompt(&mut input, AGAIN_PROMPT)?;
        if !again.is_some_and(|a| matches!(a.to_lowercase().as_str(), "yes" | "y")) {
            break;
        }
    }

    println!("\nThank you for using Pantry Match!");
    Ok(())
}

fn run_demo(engine: &MatchingEngine<'_>, provider: &dyn RecommendationProvider) {
    println!("\n=== Pantry Match Demo ===\n");

    for (i, (ingredients, dietary, cuisine, meal)) in DEMOS.into_iter().enumerate() {
        println!("\n{}", "=".repeat(60));
        println!("DEMO {}: {cuisine} {meal}", i + 1);
        println!("{}", "=".repeat(60));
        println!("Ingredients: {ingredients}");
        println!("Dietary: {dietary}\n");

        let query = MatchQuery::from_line(ingredients)
            .with_dietary(Some(dietary))
            .with_cuisine(Some(cuisine))
            .with_meal_type(Some(meal));

        print_generated(provider, &RecommendationRequest::from_query(&query));
        print_catalog_matches(engine, &query, DEFAULT_DISPLAY_LIMIT);
    }
}

// ============================================================================
// Output helpers
// ============================================================================

fn print_generated(provider: &dyn RecommendationProvider, request: &RecommendationRequest) {
    match provider.generate_recommendations(request) {
        Ok(recommendation) => println!("{recommendation}"),
        Err(e) => {
            warn!(error = %e, "generative recommendations failed");
            println!("Could not generate recommendations: {e}");
            if let Some(hint) = e.hint() {
                println!("{hint}");
            }
        }
    }
}

fn print_catalog_matches(engine: &MatchingEngine<'_>, query: &MatchQuery, limit: usize) {
    let results = engine.top_matches(query, limit);
    match render_matches(&results) {
        Some(text) => println!("\n{text}"),
        None => println!("\nNo catalog recipes match these ingredients."),
    }
}

/// Print a prompt and read one trimmed line. `None` on end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
