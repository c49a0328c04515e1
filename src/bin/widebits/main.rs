mod eval_command;
mod parse_command;

use anyhow::{anyhow, Context, Result};
use clap::{arg, command, value_parser, ArgMatches};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use widebits::text::{Conversion, Flags, FormatSpec};

use eval_command::EvalCommand;
use parse_command::ParseCommand;

/// Run `$f::<U>(args)` with `U` the unsigned type of the requested width
#[macro_export]
macro_rules! with_width {
    ($width:expr, $f:ident($($arg:expr),*)) => {
        match $width {
            64 => $f::<widebits::ubigint::U64>($($arg),*),
            128 => $f::<widebits::ubigint::U128>($($arg),*),
            256 => $f::<widebits::ubigint::U256>($($arg),*),
            512 => $f::<widebits::ubigint::U512>($($arg),*),
            1024 => $f::<widebits::ubigint::U1024>($($arg),*),
            2048 => $f::<widebits::ubigint::U2048>($($arg),*),
            4096 => $f::<widebits::ubigint::U4096>($($arg),*),
            w => Err(anyhow::anyhow!(
                "unsupported width {w}, expected a power of two from 64 to 4096"
            )),
        }
    };
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let command = command!()
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            arg!(-w --width <BITS> "Width of the integers, a power of two from 64 to 4096")
                .value_parser(value_parser!(u32))
                .default_value("256")
                .required(false)
                .global(true),
        )
        .arg(arg!(-s --signed "Treat values as two's complement").global(true))
        .arg(
            arg!(-c --conv <CONV> "Output conversion: d i u o x X p")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-f --flags <FLAGS> "Output flags from the set \"+ #-0\"")
                .allow_hyphen_values(true)
                .required(false)
                .global(true),
        )
        .arg(
            arg!(--"field-width" <N> "Minimum output field width")
                .value_parser(value_parser!(usize))
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-p --precision <N> "Minimum number of output digits")
                .value_parser(value_parser!(usize))
                .required(false)
                .global(true),
        )
        .arg(
            arg!(--bits <N> "Logical width of the output, narrower than --width")
                .value_parser(value_parser!(u32))
                .required(false)
                .global(true),
        )
        .arg(
            arg!(--prefix <PREFIX> "Alternate form prefix used with the # flag")
                .required(false)
                .global(true),
        )
        .subcommand(EvalCommand::get_command())
        .subcommand(ParseCommand::get_command());

    let matches = command.get_matches();

    let width = *matches.get_one::<u32>("width").unwrap_or(&256);
    let signed = matches.get_flag("signed");
    let spec = format_spec(&matches, signed)?;

    let output = match matches.subcommand() {
        Some(("eval", sub_matches)) => {
            EvalCommand::handle_command(sub_matches, width, signed, &spec)?
        }
        Some(("parse", sub_matches)) => {
            ParseCommand::handle_command(sub_matches, width, signed, &spec)?
        }
        _ => return Err(anyhow!("Invalid command. Use --help to see the valid commands.")),
    };
    println!("{output}");

    Ok(())
}

fn format_spec(matches: &ArgMatches, signed: bool) -> Result<FormatSpec> {
    let conv = match matches.get_one::<String>("conv") {
        Some(c) => Conversion::from_str(c).with_context(|| format!("unknown conversion {c:?}"))?,
        None if signed => Conversion::Decimal,
        None => Conversion::Unsigned,
    };

    let mut spec = FormatSpec::new(conv);
    if let Some(flags) = matches.get_one::<String>("flags") {
        spec = spec.flags(Flags::from_chars(flags));
    }
    if let Some(&width) = matches.get_one::<usize>("field-width") {
        spec = spec.width(width);
    }
    if let Some(&precision) = matches.get_one::<usize>("precision") {
        spec = spec.precision(precision);
    }
    if let Some(&bits) = matches.get_one::<u32>("bits") {
        spec = spec.bits(bits);
    }
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        spec = spec.prefix(prefix);
    }
    Ok(spec)
}
