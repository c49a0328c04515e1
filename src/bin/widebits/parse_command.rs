use anyhow::{ensure, Result};
use clap::{arg, value_parser, ArgMatches, Command};
use tracing::debug;
use widebits::text::{format_int, format_uint, parse_prefix, parse_prefix_signed, FormatSpec};
use widebits::ubigint::UInt;

use crate::with_width;

pub struct ParseCommand;

impl ParseCommand {
    pub fn get_command() -> Command {
        Command::new("parse")
            .about("Parse the leading integer of a string, strtoul style")
            .after_help(
                "Base 0 detects a 0x prefix for hex and a leading 0 for octal. \
                 Prints the value and the index of the first unparsed byte.",
            )
            .arg(arg!(<TEXT> "Text to parse").allow_hyphen_values(true))
            .arg(
                arg!(-b --base <BASE> "Radix from 2 to 36, or 0 to detect it")
                    .value_parser(value_parser!(u32))
                    .default_value("0")
                    .required(false),
            )
    }

    pub fn handle_command(
        sub_matches: &ArgMatches,
        width: u32,
        signed: bool,
        spec: &FormatSpec,
    ) -> Result<String> {
        let text = sub_matches.get_one::<String>("TEXT").map(String::as_str).unwrap_or_default();
        let base = *sub_matches.get_one::<u32>("base").unwrap_or(&0);
        ensure!(base != 1 && base <= 36, "base {base} is not 0 or in 2..=36");

        with_width!(width, parse_text(text, base, signed, spec))
    }
}

fn parse_text<T: UInt>(text: &str, base: u32, signed: bool, spec: &FormatSpec) -> Result<String> {
    let (rendered, end) = if signed {
        let (v, end) = parse_prefix_signed::<T>(text, base);
        (format_int(v, spec), end)
    } else {
        let (v, end) = parse_prefix::<T>(text, base);
        (format_uint(v, spec), end)
    };

    debug!(base, end, bits = T::BITS, "parsed");
    Ok(format!("{rendered} end={end}"))
}
