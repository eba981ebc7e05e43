//! Read configuration values from the command line, falling back to prompting on stderr.
//!
//! A value named `n` is taken from an argument of the form `n=5`. If no such argument is present
//! (or it fails to validate), the user is asked for it interactively.

use std::fmt::Display;
use std::io::{stderr, stdin, Write};
use std::str::FromStr;

pub fn with_default<S: Display, T: FromStr, F>(prompt: &str, default: &str, validator: F) -> S
where
    F: Fn(T) -> Result<S, String>,
    <T as FromStr>::Err: Display,
{
    inner(prompt, |x| {
        let x = if x.is_empty() { default } else { x };
        x.parse::<T>()
            .map_err(|err| err.to_string())
            .and_then(&validator)
    })
}

pub fn yes_no(prompt: &str, default: bool) -> bool {
    with_default(
        prompt,
        if default { "y" } else { "n" },
        |response: String| {
            let response = response.to_lowercase();
            match response.as_str() {
                "y" | "yes" | "true" => Ok(true),
                "n" | "no" | "false" => Ok(false),
                _ => Err(format!(
                    "unrecognized response '{response}'. Should be '(y)es' or '(n)o'"
                )),
            }
        },
    )
}

/// The value passed as `name=value` on the command line, if any. The last occurrence wins.
pub fn argument(name: &str) -> Option<String> {
    find_argument(std::env::args().skip(1), name)
}

fn find_argument(args: impl Iterator<Item = String>, name: &str) -> Option<String> {
    args.filter_map(|arg| {
        let (key, value) = arg.split_once('=')?;
        key.eq_ignore_ascii_case(name).then(|| value.to_string())
    })
    .last()
}

pub fn inner<S: Display, F>(prompt: &str, validator: F) -> S
where
    F: for<'a> Fn(&'a str) -> Result<S, String>,
{
    if let Some(arg) = argument(prompt) {
        match validator(arg.trim()) {
            Ok(res) => {
                eprintln!("{prompt} : {res}");
                return res;
            }
            Err(e) => eprintln!("Invalid argument {prompt}={arg}: {e}"),
        }
    }
    loop {
        eprint!("{prompt} : ");
        stderr().flush().unwrap();
        let mut input = String::new();
        let read = stdin()
            .read_line(&mut input)
            .unwrap_or_else(|_| panic!("Error reading for prompt: {prompt}"));
        let trimmed = input.trim();
        match validator(trimmed) {
            Ok(res) => {
                return res;
            }
            Err(e) if read == 0 => {
                panic!("Input closed before a valid value for {prompt} was given: {e}")
            }
            Err(e) => {
                eprintln!("Invalid input: {e}. Try again");
            }
        }
    }
}
