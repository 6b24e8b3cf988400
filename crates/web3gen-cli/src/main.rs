//! web3gen CLI
//!
//! Generate a typed TypeScript client module from a contract ABI file.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::fs;
use std::path::{Path, PathBuf};
use web3gen_codegen::{
    normalize_functions, ClientGenerator, CodegenConfig, ContractArtifact, PlainEmitter,
    SignatureStyle, SourceEmitter,
};

#[derive(Parser)]
#[command(name = "web3gen")]
#[command(about = "Generate typed TypeScript client modules from contract ABIs", long_about = None)]
struct Cli {
    /// Path to the contract ABI JSON file
    #[arg(short, long)]
    abi: PathBuf,

    /// Output directory for the generated module
    #[arg(short, long, default_value = "./generated/")]
    output: PathBuf,

    /// Name of the generated module and output file
    #[arg(short, long, default_value = "client")]
    module_name: String,

    /// Function name to exclude from generation (repeatable)
    #[arg(long)]
    skip: Vec<String>,

    /// Hash comma-separated signatures instead of the legacy concatenated form
    #[arg(long)]
    canonical_selectors: bool,

    /// Do not emit the built-in account and balance helpers
    #[arg(long)]
    no_builtins: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn validate_abi_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("ABI file does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("ABI path is not a regular file: {}", path.display());
    }
    fs::File::open(path)
        .with_context(|| format!("ABI file is not readable: {}", path.display()))?;
    Ok(())
}

fn build_config(cli: &Cli) -> CodegenConfig {
    CodegenConfig {
        module_name: cli.module_name.clone(),
        signature_style: if cli.canonical_selectors {
            SignatureStyle::Canonical
        } else {
            SignatureStyle::Concatenated
        },
        include_builtins: !cli.no_builtins,
        skip_functions: cli.skip.clone(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    validate_abi_path(&cli.abi)?;

    println!("🔧 Loading ABI from {}...", cli.abi.display());
    let artifact = ContractArtifact::from_path(&cli.abi)
        .with_context(|| format!("Failed to load ABI file: {}", cli.abi.display()))?;

    let config = build_config(cli);
    let generator = ClientGenerator::with_config(artifact, config);
    let stub_count =
        normalize_functions(generator.artifact(), &generator.config().skip_functions).len();

    println!("📦 Generating module '{}'...", generator.config().module_name);
    let module = generator.generate().context("Code generation failed")?;
    let text = PlainEmitter.emit(&module);

    // Written only after the whole module generated cleanly
    fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create output directory: {}", cli.output.display()))?;
    let out_path = cli.output.join(format!("{}.ts", module.module_name()));
    fs::write(&out_path, text)
        .with_context(|| format!("Failed to write module to {}", out_path.display()))?;

    println!("✅ Client module generated!");
    println!("   Functions: {}", stub_count);
    println!("   Output: {}", out_path.display());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = SimpleLogger::new().with_level(level);
    log::set_boxed_logger(Box::new(logger)).context("Failed to install logger")?;
    log::set_max_level(level);

    run(&cli)
}
