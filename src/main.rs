/*!
    Program printing one cryptographically secure random integer from range [0, 1000).
 ```
Usage:
   rand_below [>output.txt]
```
   The value is drawn from the operating system CSPRNG and reduced to the range without modulo bias
   (masked rejection sampling, see `entropy.rs`).
   Standard output carries exactly one line with the decimal value; diagnostics go to standard error.
   Exit status is 0 on success and 1 when the secure random source cannot be read.
   Command line arguments and environment are ignored.
 */

use std::io::{stdout, Write};

use anyhow::{Context, Result};
use tracing::{debug, error, Level};

mod entropy;
mod os_entropy;

use entropy::{Bound, SecureRandomSource};

/// Exclusive upper limit of printed values.
const BOUND: Bound = Bound::of(1000);

/// Creates concrete source of randomness used by program.
/// Never falls back to a non-secure generator.
fn source_factory() -> impl SecureRandomSource {
    os_entropy::OsEntropy
}

/// Draws one value below `BOUND` and writes it to `out` as a single decimal line.
/// Nothing is written if the draw fails.
fn run(source: &mut impl SecureRandomSource, out: &mut impl Write) -> Result<u64> {
    let value = source.uniform_below(BOUND).context("Cannot draw random value")?;
    out.write_all(format!("{}\n", value).as_bytes()).context("Cannot write value to standard output")?;
    out.flush().context("Cannot flush standard output")?;
    Ok(value)
}

fn init_logging() {
    let level = if cfg!(feature = "debug_log") { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Program main function.
fn main() -> Result<()> {
    init_logging();

    let mut source = source_factory();
    debug!(bound = %BOUND, "Drawing from OS entropy source");

    let stdout = stdout();
    let mut out = stdout.lock();
    match run(&mut source, &mut out) {
        Ok(value) => {
            debug!(value, "Value printed");
            Ok(())
        },
        Err(e) => {
            error!("Terminating without output");
            Err(e)
        }
    }
}
