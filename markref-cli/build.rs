use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the sinks registered by markref::SinkRegistry::with_defaults.
// Build scripts can't depend on the crate they build, so the list is repeated.
const AVAILABLE_SINKS: &[&str] = &["fragments", "markdown", "text"];

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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("markref")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML to Markdown and keep Markdown references consistent")
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
                .about("Convert HTML or plain text")
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_SINKS))
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("references")
                .about("List the references of a Markdown file")
                .arg(input_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove references, keeping link titles as plain text")
                .arg(input_arg())
                .arg(Arg::new("ids").required(true).num_args(1..).index(2))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("set-url")
                .about("Point a reference at a new url")
                .arg(input_arg())
                .arg(Arg::new("id").required(true).index(2))
                .arg(Arg::new("url").required(true).index(3))
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "markref", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "markref", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "markref", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
