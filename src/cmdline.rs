use thiserror::Error;

/// Upper bound on a single command-line token, in UTF-16 code units.
/// Sized to the platform path-length limit; the bound is exclusive because
/// the command-line buffer needs a trailing NUL.
pub const MAX_TOKEN_LEN: usize = 260;

#[derive(Debug, Error)]
pub enum CmdlineError {
    /// A token at or over the buffer bound is a hard error, never truncated.
    #[error("argument is too long ({len} of at most {MAX_TOKEN_LEN} UTF-16 units)")]
    ArgumentTooLong { len: usize },
}

/// Quote a single command-line token.
///
/// A token with embedded whitespace is wrapped in double quotes so the OS
/// command-line tokenizer keeps it as one argument; anything else passes
/// through unchanged. This is the tokenizer-level transform only, not general
/// shell escaping — re-quoting an already-quoted token wraps it again.
pub fn quote(arg: &str) -> Result<String, CmdlineError> {
    // Measured in UTF-16 units because that is what the OS buffer holds.
    let len = arg.encode_utf16().count();
    if len >= MAX_TOKEN_LEN {
        return Err(CmdlineError::ArgumentTooLong { len });
    }
    Ok(quote_token(arg))
}

/// The quoting transform alone, with no length check. Callers outside this
/// module must only pass tokens that already went through [`quote`].
pub(crate) fn quote_token(arg: &str) -> String {
    if arg.contains(char::is_whitespace) {
        format!("\"{arg}\"")
    } else {
        arg.to_owned()
    }
}

/// Rebuild the flat command line for the target process: the quoted target
/// path, then `--` and the space-joined quoted arguments if there are any.
///
/// The `--` separator is a fixed convention marking everything after it as
/// positional arguments for the target.
pub fn build_command_line(target: &str, args: &[String]) -> Result<String, CmdlineError> {
    let mut line = quote(target)?;
    if !args.is_empty() {
        line.push_str(" --");
        for arg in args {
            line.push(' ');
            line.push_str(&quote(arg)?);
        }
    }
    Ok(line)
}
