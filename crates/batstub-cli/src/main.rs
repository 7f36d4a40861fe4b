mod writer;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use batstub_core::catalog::{Catalog, ManifestSource, ProblemPage, ProblemSource};
use batstub_core::config::{self, BatConfig, CONFIG_FILE_NAME};
use batstub_core::generate::generate_catalog;
use batstub_core::parse::parse_declaration;
use batstub_python::emitters::stub::emit_stub;
use batstub_python::{PythonConfig, PythonStubGenerator};

#[derive(Parser)]
#[command(
    name = "batstub",
    about = "Turn CodingBat Java problems into Python stubs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one Python file per problem in a catalog manifest
    Generate {
        /// Path to the catalog manifest (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory that receives one folder per category
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop at the first problem that fails to convert
        #[arg(long)]
        strict: bool,
    },

    /// Convert a single Java declaration and print the result
    Convert {
        /// Declaration, e.g. "public int makes10(int a, int b) {"
        declaration: String,

        /// Problem description for the docstring
        #[arg(short, long, default_value = "")]
        description: String,

        /// Example in the form `call(args) → result`; repeatable
        #[arg(short, long = "example")]
        examples: Vec<String>,

        /// Print only the function stub
        #[arg(long)]
        stub_only: bool,
    },

    /// Check that every declaration in a catalog manifest parses
    Validate {
        /// Path to the catalog manifest
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the parsed signatures of a catalog manifest
    Inspect {
        /// Path to the catalog manifest
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new batstub configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            strict,
        } => cmd_generate(input, output, strict),

        Commands::Convert {
            declaration,
            description,
            examples,
            stub_only,
        } => cmd_convert(declaration, description, examples, stub_only),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "batstub", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<BatConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn load_catalog(path: PathBuf) -> Result<Catalog> {
    let source = ManifestSource::new(path);
    source
        .load()
        .with_context(|| format!("failed to load catalog {}", source.path().display()))
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>, strict: bool) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let strict = strict || cfg.strict;

    let catalog = load_catalog(input)?;
    if catalog.categories.is_empty() {
        eprintln!("No categories in catalog. Nothing to generate.");
        return Ok(());
    }

    let py_config = PythonConfig::from(&cfg);
    let processed = generate_catalog(&PythonStubGenerator, &catalog, &py_config, strict)?;

    let mut skipped = 0;
    for category in &processed {
        eprintln!("Writing {} → {}", category.name, output.join(&category.name).display());
        let summary = writer::write_category(&output, category, cfg.overwrite)?;
        for failure in &category.failures {
            eprintln!("  skipped {}: {}", failure.problem, failure.error);
        }
        skipped += category.failures.len();
        eprintln!(
            "Generated {} files in {} ({} kept as-is)",
            summary.written, category.name, summary.skipped
        );
    }

    if skipped > 0 {
        eprintln!("\n{skipped} problem(s) could not be converted.");
    }
    eprintln!("Complete!");
    Ok(())
}

fn cmd_convert(
    declaration: String,
    description: String,
    examples: Vec<String>,
    stub_only: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let py_config = PythonConfig::from(&cfg);

    let signature = parse_declaration(&declaration)?;
    if stub_only {
        println!("{}", emit_stub(&signature, &py_config.naming)?);
        return Ok(());
    }

    let page = ProblemPage {
        name: signature.name,
        url: None,
        declaration,
        description,
        examples,
    };
    print!("{}", PythonStubGenerator::render(&page, &py_config)?);
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let catalog = load_catalog(input)?;

    eprintln!("Catalog: {} categories", catalog.categories.len());
    eprintln!("  Problems: {}", catalog.problem_count());

    let mut failures = 0;
    for category in &catalog.categories {
        for problem in &category.problems {
            if let Err(e) = parse_declaration(&problem.declaration) {
                eprintln!("  {}/{}: {e}", category.name, problem.name);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} declaration(s) failed to parse");
    }
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let catalog = load_catalog(input)?;
    let summary = build_inspect_summary(&catalog, &PythonConfig::default());

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(catalog: &Catalog, config: &PythonConfig) -> serde_json::Value {
    let categories: Vec<serde_json::Value> = catalog
        .categories
        .iter()
        .map(|category| {
            let problems: Vec<serde_json::Value> = category
                .problems
                .iter()
                .map(|problem| match parse_declaration(&problem.declaration) {
                    Ok(sig) => serde_json::json!({
                        "name": problem.name,
                        "signature": sig,
                        "python": emit_stub(&sig, &config.naming)
                            .ok()
                            .and_then(|stub| stub.lines().next().map(str::to_string)),
                        "examples": problem.examples.len(),
                    }),
                    Err(e) => serde_json::json!({
                        "name": problem.name,
                        "error": e.to_string(),
                    }),
                })
                .collect();
            serde_json::json!({
                "name": category.name,
                "url": category.url,
                "problems": problems,
            })
        })
        .collect();

    serde_json::json!({ "categories": categories })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
