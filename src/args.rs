use std::ffi::OsString;

use clap::Parser;

/// Long flags that may also be spelled with a single dash, e.g. `-format`.
const SINGLE_DASH_FLAGS: [&str; 5] = ["format", "major", "minor", "micro", "modifier"];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The format string for the version. See https://calver.org for the details.
    #[arg(long, default_value = "YYYY.0M.0D", allow_hyphen_values = true)]
    pub format: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub major: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub minor: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub micro: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub modifier: String,
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_single_dash(std::env::args_os()))
    }
}

/// Rewrites `-format` / `-format=X` into `--format` / `--format=X`.
/// The argument following a bare value flag is its value and is never rewritten.
pub fn normalize_single_dash<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized = Vec::new();
    normalized.extend(args.next());

    while let Some(arg) = args.next() {
        if arg == "--" {
            normalized.push(arg);
            break;
        }
        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        let flag = value_flag(s);
        normalized.push(match flag {
            Some(ValueFlag { single_dash: true, .. }) => OsString::from(format!("-{s}")),
            _ => arg,
        });
        if let Some(ValueFlag { inline_value: false, .. }) = flag {
            normalized.extend(args.next());
        }
    }
    normalized.extend(args);
    normalized
}

#[derive(Debug, Clone, Copy)]
struct ValueFlag {
    single_dash: bool,
    inline_value: bool,
}

fn value_flag(arg: &str) -> Option<ValueFlag> {
    let rest = arg.strip_prefix('-')?;
    let (rest, single_dash) = match rest.strip_prefix('-') {
        Some(rest) => (rest, false),
        None => (rest, true),
    };
    let (name, inline_value) = match rest.split_once('=') {
        Some((name, _)) => (name, true),
        None => (rest, false),
    };
    SINGLE_DASH_FLAGS.contains(&name).then_some(ValueFlag {
        single_dash,
        inline_value,
    })
}
