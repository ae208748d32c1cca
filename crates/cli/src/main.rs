// ABOUTME: CLI for classifying media links with mediaref-core.
// ABOUTME: Classifies, formats, and validates links from arguments, files, or stdin and prints JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mediaref_core::{
    classify_detailed, classify_value, format_link, get_hostname, parse_seconds, secs_to_time,
    validate_image_link_detailed, Classification,
};
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Resolve media links into type/id references and back.
#[derive(Parser, Debug)]
#[command(name = "mediaref")]
#[command(about = "Classify media links, format references, and validate image links", long_about = None)]
struct Args {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, env = "MEDIAREF_LOG", default_value = "warn")]
    log_level: String,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify links or shorthand references into type/id pairs.
    Classify {
        /// Inputs to classify. Use "-" to read one input per line from stdin.
        inputs: Vec<String>,

        /// Read one input per line from a file. May be repeated.
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,

        /// Parse each input as a JSON value first; non-strings yield the null sentinel.
        #[arg(long, default_value_t = false)]
        json_input: bool,
    },

    /// Build a full or short link from a type code and id.
    Format {
        /// Two-letter media type code, e.g. yt.
        #[arg(value_name = "TYPE")]
        media_type: String,

        id: String,

        /// Print the type:id shorthand instead of a URL.
        #[arg(long, default_value_t = false)]
        short: bool,
    },

    /// Validate image links against the trusted image hosts.
    Image {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the hostname of each URL, one per line.
    Host {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Convert a [H:]M:SS timecode to seconds, or seconds to a timecode.
    Timecode {
        value: String,

        /// Format as 1h02m03s instead of 1:02:03.
        #[arg(long, default_value_t = false)]
        letters: bool,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Classify {
            inputs,
            files,
            json_input,
        } => run_classify(&inputs, &files, json_input, args.compact),
        Command::Format {
            media_type,
            id,
            short,
        } => {
            let link = format_link(&media_type, &id, short);
            if link.is_empty() {
                eprintln!("error: no link for type {:?} and id {:?}", media_type, id);
                return Ok(ExitCode::from(1));
            }
            println!("{}", link);
            Ok(ExitCode::SUCCESS)
        }
        Command::Image { urls } => run_image(&urls, args.compact),
        Command::Host { urls } => {
            let mut missing = 0;
            for url in &urls {
                match get_hostname(url) {
                    Some(host) => println!("{}", host),
                    None => {
                        missing += 1;
                        println!();
                    }
                }
            }
            Ok(exit_code(missing))
        }
        Command::Timecode { value, letters } => match parse_seconds(&value) {
            Ok(secs) if value.contains(':') => {
                println!("{}", secs);
                Ok(ExitCode::SUCCESS)
            }
            Ok(secs) => {
                println!("{}", secs_to_time(secs, letters));
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("error: {}", err);
                Ok(ExitCode::from(1))
            }
        },
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_classify(
    inputs: &[String],
    files: &[PathBuf],
    json_input: bool,
    compact: bool,
) -> Result<ExitCode> {
    let inputs = collect_inputs(inputs, files)?;
    if inputs.is_empty() {
        bail!("at least one input is required, as an argument, \"-\" for stdin, or --file");
    }

    let mut results = Vec::with_capacity(inputs.len());
    let mut unresolved = 0;

    for input in &inputs {
        let value = if json_input {
            serde_json::from_str::<Value>(input)
                .with_context(|| format!("invalid JSON input: {}", input))?
        } else {
            Value::String(input.clone())
        };

        let (result, rule) = match value.as_str() {
            Some(text) => match classify_detailed(text) {
                Some(matched) => (Classification::Matched(matched.reference), Some(matched.rule)),
                None => (Classification::NoMatch, None),
            },
            None => (classify_value(&value), None),
        };
        debug!(
            input = %input,
            rule = rule.unwrap_or("none"),
            id = result.reference().map_or("", |r| r.id.as_str()),
            "classified"
        );
        if !result.is_match() {
            unresolved += 1;
        }

        results.push(json!({
            "input": value,
            "result": result,
            "rule": rule,
        }));
    }

    info!(total = results.len(), unresolved, "classification finished");
    print_json(&Value::Array(results), compact)?;
    Ok(exit_code(unresolved))
}

fn run_image(urls: &[String], compact: bool) -> Result<ExitCode> {
    let mut rejected = 0;
    let results: Vec<Value> = urls
        .iter()
        .map(|url| match validate_image_link_detailed(url) {
            Some(link) => json!({
                "input": url,
                "valid": true,
                "url": link.url,
                "host": link.host,
            }),
            None => {
                rejected += 1;
                json!({ "input": url, "valid": false, "url": null, "host": null })
            }
        })
        .collect();

    info!(total = results.len(), rejected, "image validation finished");
    print_json(&Value::Array(results), compact)?;
    Ok(exit_code(rejected))
}

fn collect_inputs(inputs: &[String], files: &[PathBuf]) -> Result<Vec<String>> {
    let mut collected = Vec::new();

    for input in inputs {
        if input == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            collected.extend(non_blank_lines(&buf));
        } else {
            collected.push(input.clone());
        }
    }

    for path in files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        collected.extend(non_blank_lines(&text));
    }

    Ok(collected)
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
}

fn print_json(output: &Value, compact: bool) -> Result<()> {
    if compact {
        println!("{}", serde_json::to_string(output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(output)?);
    }
    Ok(())
}

fn exit_code(failures: usize) -> ExitCode {
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
