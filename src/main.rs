//! Prints the `k`-combinations of `{0, ..., n - 1}` in cool-lex order, one per line.
//!
//! Values are read from `name=value` arguments, or prompted for on stderr:
//!
//! ```text
//! coollex n=5 k=3 repr=auto count=true
//! ```

use std::io::{BufWriter, Write};

use coollex::{AnyGenerator, CoolLex, LendingIterator, Representation};
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    coollex::utils::init_logging();

    let n: usize = query::with_default("n", "3", Ok);
    let k: usize = query::with_default("k", "2", Ok);
    let repr = query::with_default("repr", "list", |repr: String| {
        let repr = repr.to_lowercase();
        if repr == "auto" {
            Ok(repr)
        } else {
            repr.parse::<Representation>().map(|_| repr)
        }
    });
    let count = query::yes_no("count", false);

    let mut generator = match repr.as_str() {
        "auto" => AnyGenerator::auto(n, k)?,
        repr => AnyGenerator::new(repr.parse().map_err(anyhow::Error::msg)?, n, k)?,
    };
    tracing::info!(n, k, repr = %generator.representation(), "generating");

    let mut out = BufWriter::new(std::io::stdout().lock());
    let mut printed: u64 = 0;
    let mut combinations = generator.combinations();
    while let Some(elements) = combinations.next() {
        writeln!(out, "{}", elements.format(" "))?;
        printed += 1;
    }
    out.flush()?;
    drop(out);

    if count {
        match exact::binomial(n as u64, k as u64) {
            Ok(expected) => println!("{printed} combinations, C({n}, {k}) = {expected}"),
            Err(e) => println!("{printed} combinations, C({n}, {k}) not computed: {e}"),
        }
    }
    Ok(())
}
