//! citegraph CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use citegraph_language::ParseConfig;
use citegraph_runtime::{
    GraphSnapshot, RenderOptions, compile_file, logging, parse_subject, render_store,
    save_to_file,
};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    provenance: bool,
    subject: Option<String>,
    output: Option<PathBuf>,
    max_depth: Option<usize>,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn option_value(args: &[String], i: usize, flag: &str) -> Result<String, Box<dyn std::error::Error>> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--provenance" => config.provenance = true,
            "--trace" => config.trace = true,
            "--subject" => {
                i += 1;
                config.subject = Some(option_value(args, i, "--subject")?);
            }
            "--output" => {
                i += 1;
                config.output = Some(PathBuf::from(option_value(args, i, "--output")?));
            }
            "--max-depth" => {
                i += 1;
                let value = option_value(args, i, "--max-depth")?;
                config.max_depth = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --max-depth value: {value}"))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("citegraph {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.files.is_empty() {
        return Err("no input files (see --help)".into());
    }

    logging::init(config.trace);

    let mut parse_config = ParseConfig::default();
    if let Some(max_depth) = config.max_depth {
        parse_config = parse_config.with_max_depth(max_depth);
    }
    let subject = config.subject.as_deref().map(parse_subject).transpose()?;
    let options = RenderOptions::default().with_provenance(config.provenance);

    let mut last = None;
    for file in &config.files {
        let compilation = compile_file(file, &parse_config).map_err(|e| match &e.context {
            Some(context) => format!("{context}: {e}"),
            None => e.to_string(),
        })?;
        let store = match &subject {
            Some(subject) => compilation.store.for_subject(subject),
            None => compilation.store,
        };

        if config.files.len() > 1 {
            println!("# {}", file.display());
        }
        print!("{}", render_store(&store, options));
        last = Some(store);
    }

    if let (Some(path), Some(store)) = (&config.output, &last) {
        save_to_file(&GraphSnapshot::from_store(store), path)?;
    }

    Ok(())
}

fn print_help() {
    println!(
        "citegraph - compile relationship notation into reified triples

USAGE:
    citegraph [OPTIONS] <FILE>...

ARGUMENTS:
    <FILE>...          Source files, each compiled into its own graph

OPTIONS:
    -h, --help         Print help information
    -V, --version      Print version information
    --provenance       Append the line:column each statement was written at
    --subject <ID>     Print only triples about ID (bare text is a user id)
    --output <PATH>    Write a MessagePack snapshot of the last graph
    --max-depth <N>    Limit expression nesting (default 128)
    --trace            Log every parser step to stderr

ENVIRONMENT:
    CITEGRAPH_LOG      Log filter, e.g. debug or citegraph_store=debug

EXAMPLES:
    citegraph facts.cg
    citegraph --provenance --subject ent1 facts.cg
    citegraph --output facts.msgpack facts.cg"
    );
}
