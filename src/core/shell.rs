use crate::core::validator;
use crate::domain::model::ValidationOutcome;
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Interactive read-validate-print loop. Generic over its line source,
/// output sink and clock so sessions can run against buffers in tests.
pub struct Shell<R, W, C> {
    reader: R,
    writer: W,
    clock: C,
    json: bool,
}

impl<R: BufRead, W: Write, C: Clock> Shell<R, W, C> {
    pub fn new(reader: R, writer: W, clock: C, json: bool) -> Self {
        Self {
            reader,
            writer,
            clock,
            json,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.writer, "Personnummer check")?;
        writeln!(
            self.writer,
            "Accepted formats: YYMMDD-XXXX, YYMMDDXXXX, YYYYMMDD-XXXX, YYYYMMDDXXXX"
        )?;
        writeln!(self.writer, "A '+' separator marks a person over 100 years old.")?;
        writeln!(self.writer)?;

        loop {
            write!(self.writer, "Enter a personnummer (or 'q' to quit): ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                // EOF ends the session like 'q'
                break;
            }

            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                break;
            }
            if input.is_empty() {
                writeln!(self.writer, "Error: empty input.")?;
                writeln!(self.writer)?;
                continue;
            }

            tracing::debug!("validating {} characters of input", input.len());
            let outcome = validator::validate_at(input, &self.clock);
            self.render(&outcome)?;
            writeln!(self.writer)?;
        }

        Ok(())
    }

    fn render(&mut self, outcome: &ValidationOutcome) -> Result<()> {
        if self.json {
            writeln!(self.writer, "{}", serde_json::to_string(outcome)?)?;
            return Ok(());
        }

        if outcome.is_valid {
            writeln!(self.writer, "✅ Valid personnummer")?;
            writeln!(self.writer, "Normalized: {}", outcome.normalized)?;
            if let Some(date) = outcome.birth_date {
                writeln!(self.writer, "Birth date: {}", date.format("%Y-%m-%d"))?;
            }
            if let Some(gender) = outcome.gender_hint {
                writeln!(self.writer, "Gender (heuristic): {}", gender)?;
            }
        } else {
            writeln!(self.writer, "❌ Invalid personnummer")?;
            writeln!(self.writer, "{}", outcome.error_message)?;
        }

        Ok(())
    }
}
