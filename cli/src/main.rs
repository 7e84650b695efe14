use std::path::PathBuf;

use argmatch_manager::{ArgumentsManager, Hooks, ParseResult, ParserDefinition};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "argmatch")]
#[command(about = "Run declarative argument parsers described in YAML or JSON")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse tokens with a parser definition and print the result.
    Parse(ParseArgs),
    /// Print the usage line of a parser definition.
    Usage(DefinitionArgs),
    /// Print the full help text of a parser definition.
    Help(DefinitionArgs),
    /// Check a parser definition for configuration errors.
    Validate(DefinitionArgs),
}

#[derive(Debug, Args)]
struct DefinitionArgs {
    /// Parser definition file (`.json` is read as JSON, anything else as YAML).
    #[arg(long, short)]
    definition: PathBuf,
    /// Program name to render instead of the one in the definition.
    #[arg(long)]
    program: Option<String>,
}

#[derive(Debug, Args)]
struct ParseArgs {
    #[command(flatten)]
    definition: DefinitionArgs,
    /// Output format for the parse result.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Fail when any token is left unclaimed.
    #[arg(long)]
    strict: bool,
    /// Tokens to parse, given after `--`.
    #[arg(last = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Usage(args) => run_usage(args),
        Command::Help(args) => run_help(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Hooks that talk to the terminal: diagnostics on stderr, help on stdout,
/// and termination requests end the process.
fn console_hooks() -> Hooks {
    Hooks::default()
        .on_diagnostic(|diagnostic| eprintln!("{diagnostic}"))
        .on_help(|text| println!("{text}"))
        .on_terminate(|code| std::process::exit(code))
}

fn load_manager(args: &DefinitionArgs) -> Result<ArgumentsManager, String> {
    let definition = ParserDefinition::load(&args.definition)
        .map_err(|err| format!("Failed to load '{}': {err}", args.definition.display()))?;
    let mut manager = definition
        .build()
        .map_err(|err| format!("'{}': {err}", args.definition.display()))?;
    if let Some(program) = &args.program {
        manager.set_program(program.clone());
    }
    Ok(manager)
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let mut manager = load_manager(&args.definition)?;
    manager.set_hooks(console_hooks());

    debug!(tokens = args.tokens.len(), "Parsing tokens");
    let result = manager.parse(args.tokens).map_err(|err| err.to_string())?;

    if result.help_requested {
        return Ok(());
    }
    if args.strict && !result.unclaimed.is_empty() {
        return Err(format!(
            "unrecognized argument(s): {}",
            result.unclaimed.join(" ")
        ));
    }

    println!("{}", format_result(&result, args.format)?);
    Ok(())
}

fn run_usage(args: DefinitionArgs) -> Result<(), String> {
    let manager = load_manager(&args)?;
    println!("{}", manager.make_usage(manager.program()));
    Ok(())
}

fn run_help(args: DefinitionArgs) -> Result<(), String> {
    let manager = load_manager(&args)?;
    println!("{}", manager.make_help(manager.program()));
    Ok(())
}

fn run_validate(args: DefinitionArgs) -> Result<(), String> {
    let manager = load_manager(&args)?;
    println!(
        "Validated '{}': {} parameter(s) for {}.",
        args.definition.display(),
        manager.parameters().len(),
        manager.program()
    );
    Ok(())
}

fn format_result(result: &ParseResult, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&result.to_json())
            .map_err(|err| format!("Failed to serialize parse result: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(&result.values)
            .map(|raw| raw.trim_end().to_string())
            .map_err(|err| format!("Failed to serialize parse result: {err}")),
    }
}
