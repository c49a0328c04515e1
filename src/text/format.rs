use strum_macros::{Display, EnumString};

use crate::bigint::BigIntImpl;
use crate::text::to_str_radix;
use crate::ubigint::UInt;

/// The printf conversion letter of a single value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Conversion {
    #[strum(serialize = "d")]
    Decimal,
    #[strum(serialize = "i")]
    Integer,
    #[strum(serialize = "u")]
    Unsigned,
    #[strum(serialize = "o")]
    Octal,
    #[strum(serialize = "x")]
    Hex,
    #[strum(serialize = "X")]
    UpperHex,
    #[strum(serialize = "p")]
    Pointer,
}

impl Conversion {
    pub fn radix(self) -> u32 {
        match self {
            Self::Decimal | Self::Integer | Self::Unsigned => 10,
            Self::Octal => 8,
            Self::Hex | Self::UpperHex | Self::Pointer => 16,
        }
    }

    /// `d` and `i` read the value as signed and take the sign flags
    pub fn is_signed(self) -> bool {
        matches!(self, Self::Decimal | Self::Integer)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// `+`
    pub plus: bool,
    /// ` `
    pub space: bool,
    /// `#`
    pub alternate: bool,
    /// `-`
    pub left: bool,
    /// `0`
    pub zero: bool,
    /// Upper case digits and prefix for every radix
    pub upper: bool,
    /// Read the value as unsigned even under `d` and `i`
    pub unsigned: bool,
    /// Pointer style: zero is `(nil)`, anything else takes the alternate form
    pub pointer: bool,
}

impl Flags {
    /// Flags from printf flag characters; unknown characters are ignored
    pub fn from_chars(s: &str) -> Self {
        let mut flags = Self::default();
        for c in s.chars() {
            match c {
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '#' => flags.alternate = true,
                '-' => flags.left = true,
                '0' => flags.zero = true,
                _ => {}
            }
        }
        flags
    }
}

/// How to render one value, the pieces of a `%[flags][width][.precision]conv`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    pub conv: Conversion,
    /// Minimum field width
    pub width: usize,
    /// Minimum number of digits
    pub precision: Option<usize>,
    pub flags: Flags,
    /// Logical width of the value when narrower than its storage
    pub bits: Option<u32>,
    /// Replaces the radix prefix of the alternate form
    pub prefix: Option<String>,
}

impl FormatSpec {
    pub fn new(conv: Conversion) -> Self {
        Self {
            conv,
            width: 0,
            precision: None,
            flags: Flags::default(),
            bits: None,
            prefix: None,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn bits(mut self, bits: u32) -> Self {
        self.bits = Some(bits);
        self
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// `bits` when it is a real narrowing of a `storage`-bit value
    fn logical_bits(&self, storage: u32) -> Option<u32> {
        self.bits.filter(|&b| b > 0 && b < storage)
    }
}

/// Render an unsigned value
pub fn format_uint<T: UInt>(v: T, spec: &FormatSpec) -> String {
    let v = match spec.logical_bits(T::BITS) {
        Some(b) => v & ((T::ONE << b) - T::ONE),
        None => v,
    };
    render(false, v, spec)
}

/// Render a signed value; only `d` and `i` without the unsigned flag show a sign
pub fn format_int<U: UInt>(v: BigIntImpl<U>, spec: &FormatSpec) -> String {
    if !spec.conv.is_signed() || spec.flags.unsigned || spec.flags.pointer {
        return format_uint(v.to_bits(), spec);
    }

    let v = match spec.logical_bits(U::BITS) {
        Some(b) => (v << (U::BITS - b)) >> (U::BITS - b),
        None => v,
    };
    render(v.is_negative(), v.unsigned_abs(), spec)
}

fn render<T: UInt>(negative: bool, mag: T, spec: &FormatSpec) -> String {
    let flags = spec.flags;
    if flags.pointer || spec.conv == Conversion::Pointer {
        if mag.is_zero() {
            return pad(String::new(), "(nil)".to_string(), spec.width, flags.left, false);
        }
        // `p` is hex in pointer style
        let conv = match spec.conv {
            Conversion::Pointer => Conversion::Hex,
            conv => conv,
        };
        let spec = FormatSpec {
            conv,
            flags: Flags { alternate: true, pointer: false, plus: false, space: false, ..flags },
            ..spec.clone()
        };
        return render(false, mag, &spec);
    }

    let upper = flags.upper || spec.conv == Conversion::UpperHex;
    let mut digits = if spec.precision == Some(0) && mag.is_zero() {
        String::new()
    } else {
        to_str_radix(mag, spec.conv.radix(), upper)
    };
    if let Some(p) = spec.precision {
        if digits.len() < p {
            digits.insert_str(0, &"0".repeat(p - digits.len()));
        }
    }

    let mut head = String::new();
    if spec.conv.is_signed() {
        if negative {
            head.push('-');
        } else if flags.plus {
            head.push('+');
        } else if flags.space {
            head.push(' ');
        }
    }

    if flags.alternate {
        match (&spec.prefix, spec.conv) {
            (Some(prefix), _) => head.push_str(prefix),
            // the alternate octal form only guarantees a leading zero
            (None, Conversion::Octal) if !digits.starts_with('0') => digits.insert(0, '0'),
            (None, Conversion::Hex) if !mag.is_zero() => {
                head.push_str(if upper { "0X" } else { "0x" })
            }
            (None, Conversion::UpperHex) if !mag.is_zero() => head.push_str("0X"),
            _ => {}
        }
    }

    // zero padding yields to an explicit precision, as in C
    let zero_pad = flags.zero && !flags.left && spec.precision.is_none();
    pad(head, digits, spec.width, flags.left, zero_pad)
}

fn pad(head: String, digits: String, width: usize, left: bool, zero_pad: bool) -> String {
    let len = head.len() + digits.len();
    if len >= width {
        return head + &digits;
    }

    let fill = width - len;
    if left {
        head + &digits + &" ".repeat(fill)
    } else if zero_pad {
        head + &"0".repeat(fill) + &digits
    } else {
        " ".repeat(fill) + &head + &digits
    }
}
