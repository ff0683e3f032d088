use std::io::{self, BufRead, Write};

/// Ask a yes/no question and read one line of input.
///
/// Only "yes" (any case, surrounding whitespace ignored) confirms. End of
/// input counts as a refusal.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{question} (yes/no): ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
