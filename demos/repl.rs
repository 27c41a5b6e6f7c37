// ============================================================================
// Interactive Calculator
// ============================================================================
//
// Reads "operand operator operand" lines from stdin until EOF:
//
//   ? 1/2 + 1/3
//   = 5/6
//
// Build with `--features logging` to see calculator events.

use fraction_calculator::prelude::*;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

fn main() -> io::Result<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let calc = CalculatorBuilder::new()
        .event_handler(Arc::new(LoggingEventHandler))
        .build();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "? ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match calc.render_line(&line) {
            Ok(result) => writeln!(stdout, "= {}", result)?,
            Err(e) => writeln!(stdout, "= {}", e)?,
        }
        write!(stdout, "\n? ")?;
        stdout.flush()?;
    }

    writeln!(stdout)?;
    Ok(())
}
