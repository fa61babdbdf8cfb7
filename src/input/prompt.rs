use std::io::{BufRead, Write};

use crate::error::{InputError, InputResult};

/// Line-oriented prompter over any reader/writer pair.
///
/// Blank lines are skipped. Anything that does not parse as a number is a
/// fatal [`InputError::Malformed`].
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print a line to the user (warnings, echoed values).
    pub fn say(&mut self, message: &str) -> InputResult<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    fn read_nonblank(&mut self, prompt: &str, field: &'static str) -> InputResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof { field });
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    /// Read exactly `N` numbers from one line, separated by spaces or commas.
    pub fn read_numbers<const N: usize>(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> InputResult<[f64; N]> {
        let line = self.read_nonblank(prompt, field)?;
        let tokens: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != N {
            return Err(InputError::WrongArity { field, expected: N, got: tokens.len() });
        }
        let mut out = [0.0; N];
        for (slot, token) in out.iter_mut().zip(tokens) {
            *slot = parse_number(token, field)?;
        }
        Ok(out)
    }

    pub fn read_f64(&mut self, prompt: &str, field: &'static str) -> InputResult<f64> {
        let [v] = self.read_numbers::<1>(prompt, field)?;
        Ok(v)
    }

    /// `y`/`Y` (or any answer starting with it) is yes; anything else is no.
    pub fn read_yes_no(&mut self, prompt: &str, field: &'static str) -> InputResult<bool> {
        let answer = self.read_nonblank(prompt, field)?;
        Ok(answer.starts_with(['y', 'Y']))
    }
}

/// Only finite numbers are accepted; `nan` and `inf` parse but are malformed here.
fn parse_number(token: &str, field: &'static str) -> InputResult<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::Malformed { field, value: token.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_pair_with_spaces_or_commas() {
        let mut p = prompter("1.5 2\n3, 4\n");
        assert_eq!(p.read_numbers::<2>("pos: ", "position").unwrap(), [1.5, 2.0]);
        assert_eq!(p.read_numbers::<2>("pos: ", "position").unwrap(), [3.0, 4.0]);
    }

    #[test]
    fn prompt_text_is_written() {
        let mut p = prompter("7\n");
        p.read_f64("Initial velocity (m/s): ", "speed").unwrap();
        let (_, out) = p.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Initial velocity (m/s): ");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut p = prompter("\n   \n42\n");
        assert_eq!(p.read_f64("> ", "angle").unwrap(), 42.0);
    }

    #[test]
    fn non_numeric_is_fatal() {
        let mut p = prompter("fast\n");
        let err = p.read_f64("> ", "speed").unwrap_err();
        assert!(matches!(err, InputError::Malformed { field: "speed", ref value } if value == "fast"));
        assert_eq!(err.to_string(), "invalid speed: 'fast' is not a number");
    }

    #[test]
    fn non_finite_is_fatal() {
        let mut p = prompter("nan\ninf\n-infinity\n0 inf\n");
        for _ in 0..3 {
            assert!(matches!(p.read_f64("> ", "height"), Err(InputError::Malformed { .. })));
        }
        let err = p.read_numbers::<2>("> ", "position").unwrap_err();
        assert!(matches!(err, InputError::Malformed { field: "position", ref value } if value == "inf"));
    }

    #[test]
    fn wrong_count_is_fatal() {
        let mut p = prompter("1\n");
        let err = p.read_numbers::<2>("> ", "position").unwrap_err();
        assert!(matches!(err, InputError::WrongArity { expected: 2, got: 1, .. }));
    }

    #[test]
    fn eof_is_fatal() {
        let mut p = prompter("");
        assert!(matches!(
            p.read_f64("> ", "thrust time"),
            Err(InputError::UnexpectedEof { field: "thrust time" })
        ));
    }

    #[test]
    fn yes_no_answers() {
        let mut p = prompter("y\nYes\nn\nmaybe\n");
        assert!(p.read_yes_no("? ", "trace").unwrap());
        assert!(p.read_yes_no("? ", "trace").unwrap());
        assert!(!p.read_yes_no("? ", "trace").unwrap());
        assert!(!p.read_yes_no("? ", "trace").unwrap());
    }
}
