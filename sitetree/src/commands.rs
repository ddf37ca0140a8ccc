use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitetree")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitetree")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress the summary and non-essential output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Log every newly recorded branch")
                .required(false)
                .global(true)
                .conflicts_with("quiet"),
        )
        .subcommand_required(false)
        .subcommand(
            command!("map")
                .about(
                    "Build a site map from observed request URLs. Each URL contributes its host \
                and path segments to the tree.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("A URL to record (repeatable, scheme optional)")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    arg!(-H --"hosts-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of URLs to record"),
                )
                .arg(
                    arg!(--"stdin")
                        .required(false)
                        .help("Read newline-delimited URLs from standard input")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save the map to a file (default: display to screen)"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Map format: text, json, markdown")
                        .value_parser(["text", "json", "markdown", "md"])
                        .default_value("text"),
                ),
        )
}
