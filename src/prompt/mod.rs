use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line of input, trimmed.
///
/// Closed input is reported as [`io::ErrorKind::UnexpectedEof`] so callers
/// never spin on an exhausted reader.
pub fn prompt_string(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }

    Ok(line.trim().to_string())
}
