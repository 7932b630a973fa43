//! printf-style positional substitution for formatted accessors.
//!
//! Supported verbs: `%v %s %d %f %F %g %t %q %x %X %c %%`, with the flags
//! `-+ 0#`, a width and a precision. Problems are rendered inline rather than
//! reported: `%!d(MISSING)`, `%!d(string=x)` and `%!(EXTRA int=1)`. A width
//! or precision above `MAX_WIDTH` is dropped and marked `%!(BADWIDTH)` or
//! `%!(BADPREC)`.

use std::{fmt, sync::LazyLock};

use regex::{Captures, Regex};

static VERB_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([-+ 0#]*)(\d+)?(?:\.(\d*))?([a-zA-Z%])").unwrap());

/// Largest width or precision honoured by a verb.
const MAX_WIDTH: usize = 1_000_000;

/// A positional argument for [`format_positional`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Arg>),
}

impl Arg {
    fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "bool",
            Arg::List(_) => "list",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Float(x) => write!(f, "{}", x),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(" "))
            }
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::List(items.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Default)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
    verb: char,
}

impl Spec {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let mut spec = Spec::default();
        if let Some(flags) = caps.get(1) {
            for flag in flags.as_str().chars() {
                match flag {
                    '-' => spec.minus = true,
                    '+' => spec.plus = true,
                    ' ' => spec.space = true,
                    '0' => spec.zero = true,
                    '#' => spec.sharp = true,
                    _ => {}
                }
            }
        }
        if let Some(m) = caps.get(2) {
            spec.width = bounded(m.as_str());
            spec.bad_width = spec.width.is_none();
        }
        if let Some(m) = caps.get(3) {
            // `%.f` means precision zero
            spec.precision = if m.as_str().is_empty() {
                Some(0)
            } else {
                bounded(m.as_str())
            };
            spec.bad_precision = spec.precision.is_none();
        }
        spec.verb = caps
            .get(4)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or('v');
        spec
    }

    fn bad_markers(&self) -> &'static str {
        match (self.bad_width, self.bad_precision) {
            (false, false) => "",
            (true, false) => "%!(BADWIDTH)",
            (false, true) => "%!(BADPREC)",
            (true, true) => "%!(BADWIDTH)%!(BADPREC)",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self.verb, 'd' | 'f' | 'F' | 'g' | 'x' | 'X')
    }
}

fn bounded(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok().filter(|n| *n <= MAX_WIDTH)
}

/// Substitute `args` into the printf-style `template`.
pub fn format_positional(template: &str, args: &[Arg]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut last = 0;

    for caps in VERB_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&template[last..whole.start()]);
        last = whole.end();

        let spec = Spec::from_captures(&caps);
        if spec.verb == '%' {
            output.push('%');
            continue;
        }
        output.push_str(spec.bad_markers());
        match args.get(next_arg) {
            Some(arg) => {
                output.push_str(&render(arg, &spec));
                next_arg += 1;
            }
            None => output.push_str(&format!("%!{}(MISSING)", spec.verb)),
        }
    }
    output.push_str(&template[last..]);

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..]
            .iter()
            .map(|arg| format!("{}={}", arg.type_name(), arg))
            .collect();
        output.push_str(&format!("%!(EXTRA {})", extra.join(", ")));
    }
    output
}

fn render(arg: &Arg, spec: &Spec) -> String {
    let body = match (spec.verb, arg) {
        ('v', Arg::Int(i)) => signed(i.to_string(), *i >= 0, spec),
        ('v', Arg::Float(f)) => signed(f.to_string(), *f >= 0.0, spec),
        ('v', _) => arg.to_string(),
        ('s', Arg::Str(s)) => truncate(s, spec.precision),
        ('s', Arg::List(_)) => arg.to_string(),
        ('d', Arg::Int(i)) => signed(i.to_string(), *i >= 0, spec),
        ('f' | 'F', Arg::Float(f)) => signed(
            format!("{:.*}", spec.precision.unwrap_or(6), f),
            *f >= 0.0,
            spec,
        ),
        ('g', Arg::Float(f)) => match spec.precision {
            Some(precision) => signed(format!("{:.*}", precision, f), *f >= 0.0, spec),
            None => signed(f.to_string(), *f >= 0.0, spec),
        },
        ('t', Arg::Bool(b)) => b.to_string(),
        ('q', Arg::Str(s)) => format!("{:?}", s),
        ('x', Arg::Int(i)) => hex(*i, spec.sharp, false),
        ('X', Arg::Int(i)) => hex(*i, spec.sharp, true),
        ('x', Arg::Str(s)) => s.bytes().map(|b| format!("{:02x}", b)).collect(),
        ('X', Arg::Str(s)) => s.bytes().map(|b| format!("{:02X}", b)).collect(),
        ('c', Arg::Int(i)) => u32::try_from(*i)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
        _ => return format!("%!{}({}={})", spec.verb, arg.type_name(), arg),
    };
    pad(body, spec)
}

fn signed(body: String, non_negative: bool, spec: &Spec) -> String {
    if !non_negative {
        body
    } else if spec.plus {
        format!("+{}", body)
    } else if spec.space {
        format!(" {}", body)
    } else {
        body
    }
}

fn hex(value: i64, sharp: bool, upper: bool) -> String {
    let digits = if upper {
        format!("{:X}", value.unsigned_abs())
    } else {
        format!("{:x}", value.unsigned_abs())
    };
    let prefix = match (sharp, upper) {
        (false, _) => "",
        (true, false) => "0x",
        (true, true) => "0X",
    };
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}{}", sign, prefix, digits)
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(max) => s.chars().take(max).collect(),
        None => s.to_string(),
    }
}

fn pad(body: String, spec: &Spec) -> String {
    let Some(width) = spec.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let fill = width - len;

    if spec.minus {
        format!("{}{}", body, " ".repeat(fill))
    } else if spec.zero && spec.is_numeric() {
        let sign_len = if body.starts_with(['-', '+', ' ']) { 1 } else { 0 };
        let (sign, digits) = body.split_at(sign_len);
        format!("{}{}{}", sign, "0".repeat(fill), digits)
    } else {
        format!("{}{}", " ".repeat(fill), body)
    }
}
