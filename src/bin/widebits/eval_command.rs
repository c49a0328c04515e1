use anyhow::{bail, ensure, Context, Result};
use clap::{arg, ArgMatches, Command};
use std::str::FromStr;
use tracing::debug;
use widebits::bigint::BigIntImpl;
use widebits::error::ParseIntError;
use widebits::montgomery::Montgomery;
use widebits::text::{format_int, format_uint, FormatSpec};
use widebits::ubigint::{Reciprocal, UInt};

use crate::with_width;

const UNSIGNED_OPS: &[&str] = &[
    "add", "sub", "mul", "div", "rem", "pow", "powmod", "gcd", "shl", "shr", "clz",
];
const SIGNED_OPS: &[&str] = &[
    "add", "sub", "mul", "div", "rem", "pow", "shl", "shr", "neg", "abs",
];

pub struct EvalCommand;

impl EvalCommand {
    pub fn get_command() -> Command {
        Command::new("eval")
            .about("Evaluate one operation on fixed-width integers")
            .after_help(format!(
                "Unsigned operations: {}\nSigned operations: {}\n\
                 Operands are decimal or 0x, 0o, 0b prefixed and wrap to the width.",
                UNSIGNED_OPS.join(" "),
                SIGNED_OPS.join(" ")
            ))
            .arg(arg!(<OP> "Operation to evaluate"))
            .arg(arg!(<OPERANDS> ... "Operands").allow_negative_numbers(true))
    }

    pub fn handle_command(
        sub_matches: &ArgMatches,
        width: u32,
        signed: bool,
        spec: &FormatSpec,
    ) -> Result<String> {
        let op = sub_matches.get_one::<String>("OP").map(String::as_str).unwrap_or_default();
        let operands: Vec<String> = sub_matches
            .get_many::<String>("OPERANDS")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        if signed {
            with_width!(width, eval_signed(op, &operands, spec))
        } else {
            with_width!(width, eval_unsigned(op, &operands, spec))
        }
    }
}

fn parse_operands<V: FromStr<Err = ParseIntError>>(operands: &[String]) -> Result<Vec<V>> {
    operands
        .iter()
        .map(|s| s.parse::<V>().with_context(|| format!("invalid operand {s:?}")))
        .collect()
}

/// Shift amounts past `u32::MAX` clear the value anyway
fn shift_amount<T: UInt>(n: T) -> u32 {
    if T::BITS - n.clz() > 32 {
        u32::MAX
    } else {
        n.as_u64() as u32
    }
}

fn eval_unsigned<T>(op: &str, operands: &[String], spec: &FormatSpec) -> Result<String>
where
    T: UInt + FromStr<Err = ParseIntError>,
{
    let values = parse_operands::<T>(operands)?;

    let result = match (op, values.as_slice()) {
        ("add", &[a, b]) => a + b,
        ("sub", &[a, b]) => a - b,
        ("mul", &[a, b]) => a * b,
        ("div", &[a, b]) => {
            ensure!(!b.is_zero(), "division by zero");
            a.div_rem(b).0
        }
        ("rem", &[a, b]) => {
            ensure!(!b.is_zero(), "division by zero");
            a.div_rem(b).1
        }
        ("pow", &[a, e]) => a.pow(e),
        ("powmod", &[a, e, m]) => {
            ensure!(!m.is_zero(), "modulus is zero");
            if m.bit(0) {
                Montgomery::new(m).pow_mod(a, e)
            } else {
                a.pow_mod(e, &Reciprocal::new(m))
            }
        }
        ("gcd", &[a, b]) => a.gcd(b),
        ("shl", &[a, n]) => a << shift_amount(n),
        ("shr", &[a, n]) => a >> shift_amount(n),
        ("clz", &[a]) => T::from_u64(a.clz() as u64),
        (op, values) if UNSIGNED_OPS.contains(&op) => {
            bail!("{op} does not take {} operands", values.len())
        }
        (op, _) => bail!("unknown unsigned operation {op:?}"),
    };

    debug!(op, bits = T::BITS, "evaluated unsigned");
    Ok(format_uint(result, spec))
}

fn eval_signed<T: UInt>(op: &str, operands: &[String], spec: &FormatSpec) -> Result<String> {
    let values = parse_operands::<BigIntImpl<T>>(operands)?;

    let result = match (op, values.as_slice()) {
        ("add", &[a, b]) => a + b,
        ("sub", &[a, b]) => a - b,
        ("mul", &[a, b]) => a * b,
        ("div", &[a, b]) => {
            ensure!(!b.is_zero(), "division by zero");
            a / b
        }
        ("rem", &[a, b]) => {
            ensure!(!b.is_zero(), "division by zero");
            a % b
        }
        ("pow", &[a, e]) => {
            ensure!(!e.is_negative(), "negative exponent");
            a.pow(e.to_bits())
        }
        ("shl", &[a, n]) => a << shift_amount(n.to_bits()),
        ("shr", &[a, n]) => a >> shift_amount(n.to_bits()),
        ("neg", &[a]) => -a,
        ("abs", &[a]) => a.abs(),
        (op, values) if SIGNED_OPS.contains(&op) => {
            bail!("{op} does not take {} operands", values.len())
        }
        (op, _) => bail!("unknown signed operation {op:?}"),
    };

    debug!(op, bits = T::BITS, "evaluated signed");
    Ok(format_int(result, spec))
}
