// Command-line interface for markref
//
// This binary converts HTML (or plain text) into Markdown, plain text or
// fragments, and edits the footer references of Markdown produced that way.
//
// Usage:
//  markref <input> [--to <sink>] [-o <file>]         - Convert (default command)
//  markref convert <input> [--to <sink>] [-o <file>] - Same as above (explicit)
//  markref references <input> [--json]               - List references
//  markref remove <input> <id>... [-o <file>]        - Remove references
//  markref set-url <input> <id> <url> [-o <file>]    - Change a reference url
//  markref prune <input> [-o <file>]                 - Drop references nobody cites
//  markref clean <input>                             - Citation-free text
//
// Extra Parameters:
//
// Configuration keys can be overridden for one run with --extra-<name> <value>.
// The CLI layer strips the "extra-" prefix and applies the value on top of the
// loaded configuration.
// Example:
//  markref page.html --to text --extra-line-feeds false

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use markref::sinks::SinkOptions;
use markref::{MarkdownDocument, MarkrefError, SinkRegistry};
use markref_config::{Loader, MarkrefConfig};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &[
    "convert",
    "references",
    "remove",
    "set-url",
    "prune",
    "clean",
    "help",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path ('-' for stdin)")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("markref")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML to Markdown and keep Markdown references consistent")
        .long_about(
            "markref converts HTML (or plain text) into a small Markdown dialect with\n\
            footer references, and edits those references afterwards.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override a configuration key for one run:\n  \
            line-feeds, default-title, min-sentence-length, max-prune-passes.\n\n\
            Examples:\n  \
            markref page.html                           # Markdown to stdout\n  \
            markref page.html --to text -o page.txt     # Plain text file\n  \
            markref references page.md --json           # Reference table as JSON\n  \
            markref remove page.md 2 3                  # Drop references 2 and 3\n  \
            markref prune page.md -o page.md            # Drop uncited references",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markref.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert HTML or plain text (default command)")
                .long_about(
                    "Convert HTML or plain text with one of the built-in sinks.\n\n\
                    Sinks:\n  \
                    - markdown:  Markdown with a footer reference table (.md)\n  \
                    - text:      Plain text, one block per line (.txt)\n  \
                    - fragments: Title, body, paragraph and sentence fragments as JSON (.json)\n\n\
                    Without --to the sink is picked from the -o extension, falling back to markdown.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target sink")
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("references")
                .about("List the references of a Markdown file")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the references as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove references, keeping link titles as plain text")
                .arg(input_arg())
                .arg(
                    Arg::new("ids")
                        .help("Reference ids to remove")
                        .required(true)
                        .num_args(1..)
                        .index(2)
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("set-url")
                .about("Point a reference at a new url")
                .arg(input_arg())
                .arg(
                    Arg::new("id")
                        .help("Reference id")
                        .required(true)
                        .index(2)
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(Arg::new("url").help("New url").required(true).index(3))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("prune")
                .about("Remove references that are no longer cited")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("clean")
                .about("Print the text of a Markdown file without citations")
                .arg(input_arg()),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file path means "convert"
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        tracing::warn!(parameter = %key, "ignoring unknown --extra parameter");
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            handle_convert_command(input, to, output, &config);
        }
        Some(("references", sub_matches)) => {
            let input = required(sub_matches, "input");
            handle_references_command(input, sub_matches.get_flag("json"));
        }
        Some(("remove", sub_matches)) => {
            let input = required(sub_matches, "input");
            let ids: Vec<u32> = sub_matches
                .get_many::<u32>("ids")
                .map(|ids| ids.copied().collect())
                .unwrap_or_default();
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_remove_command(input, &ids, output);
        }
        Some(("set-url", sub_matches)) => {
            let input = required(sub_matches, "input");
            let id = sub_matches.get_one::<u32>("id").copied().unwrap_or_default();
            let url = required(sub_matches, "url");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_set_url_command(input, id, url, output);
        }
        Some(("prune", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_prune_command(input, output, &config);
        }
        Some(("clean", sub_matches)) => {
            let input = required(sub_matches, "input");
            handle_clean_command(input);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_default()
}

/// Logs go to stderr; RUST_LOG wins unless --verbose is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    config: &MarkrefConfig,
) {
    let registry = SinkRegistry::with_defaults_and_options(SinkOptions::from(&config.convert));

    let sink = to
        .map(str::to_string)
        .or_else(|| output.and_then(|path| registry.detect_sink_from_filename(path)))
        .unwrap_or_else(|| "markdown".to_string());

    let source = read_input(input);
    let result = registry.convert_html(&source, &sink).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Available sinks: {}", registry.list_sinks().join(", "));
        std::process::exit(1);
    });

    write_output(output, &result);
}

/// Handle the references command
fn handle_references_command(input: &str, json: bool) {
    let doc = read_document(input);

    if json {
        let references: Vec<_> = doc.references().collect();
        let text = serde_json::to_string_pretty(&references).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{text}");
        return;
    }

    for reference in doc.references() {
        let mut line = format!("{}\t{}\t{}", reference.id(), reference.kind(), reference.url());
        if !reference.titles().is_empty() {
            line.push('\t');
            line.push_str(&reference.titles().join(" | "));
        }
        println!("{line}");
    }
    for id in doc.orphan_citations() {
        eprintln!("Warning: citation [{id}] has no reference");
    }
}

/// Handle the remove command
fn handle_remove_command(input: &str, ids: &[u32], output: Option<&str>) {
    let mut doc = read_document(input);
    for id in ids {
        if doc.remove_reference(*id).is_none() {
            tracing::warn!(id, "no such reference; nothing removed");
        }
    }
    write_output(output, &doc.to_markdown());
}

/// Handle the set-url command
fn handle_set_url_command(input: &str, id: u32, url: &str, output: Option<&str>) {
    let mut doc = read_document(input);
    if !doc.set_reference_url(id, url) {
        eprintln!("Error: {}", MarkrefError::UnknownReferenceId(id));
        std::process::exit(1);
    }
    write_output(output, &doc.to_markdown());
}

/// Handle the prune command
fn handle_prune_command(input: &str, output: Option<&str>, config: &MarkrefConfig) {
    let mut doc = read_document(input);
    let removed = doc.prune_dead_references_with_limit(config.references.max_prune_passes);
    tracing::info!(removed, "pruned dead references");
    write_output(output, &doc.to_markdown());
}

/// Handle the clean command
fn handle_clean_command(input: &str) {
    let doc = read_document(input);
    print!("{}", doc.clean_text());
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn read_document(input: &str) -> MarkdownDocument {
    let source = read_input(input);
    MarkdownDocument::parse(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MarkrefConfig {
    let loader = Loader::new().with_optional_file("markref.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MarkrefConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("line-feeds") {
        config.convert.text.line_feeds = parse_bool_arg("line-feeds", &raw);
    }
    if let Some(raw) = extra_params.remove("default-title") {
        config.convert.fragments.default_title = raw;
    }
    if let Some(raw) = extra_params.remove("min-sentence-length") {
        config.convert.fragments.min_sentence_length =
            parse_usize_arg("min-sentence-length", &raw);
    }
    if let Some(raw) = extra_params.remove("max-prune-passes") {
        config.references.max_prune_passes = parse_usize_arg("max-prune-passes", &raw);
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
