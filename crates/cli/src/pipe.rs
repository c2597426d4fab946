//! Title-at-a-time tokenize loop.
//!
//! Used for titles given on the command line and, in pipe mode, for one
//! title per stdin line. A failing title is reported on stderr and the loop
//! moves on; the exit code records that something failed.
//!
//! `extract --dry-run` echoes the title column through here as well.

use std::io::{BufRead, Write};

use keyword_core::Result;
use keyword_tokenizer::Tokenizer;

use crate::format::{format_error, format_keywords, format_title, OutputMode};

/// Tokenize each title and write its keywords. Returns the exit code.
pub fn run_titles<I, S, W>(tokenizer: &Tokenizer, titles: I, out: &mut W, mode: OutputMode) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut exit_code = 0;
    for title in titles {
        if !tokenize_title(tokenizer, title.as_ref(), out, mode) {
            exit_code = 1;
        }
    }
    exit_code
}

/// Run in pipe mode: read titles from `input`, one per line.
pub fn run_pipe<R: BufRead, W: Write>(
    tokenizer: &Tokenizer,
    input: R,
    out: &mut W,
    mode: OutputMode,
) -> i32 {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("(error) Failed to read stdin: {}", e);
                return 1;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        if !tokenize_title(tokenizer, &line, out, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Echo titles untokenized, for `extract --dry-run`. Returns the number
/// written; the first source error stops the echo.
pub fn echo_titles<I, W>(titles: I, out: &mut W, mode: OutputMode) -> Result<u64>
where
    I: IntoIterator<Item = Result<String>>,
    W: Write,
{
    let mut written = 0;
    for title in titles {
        writeln!(out, "{}", format_title(&title?, mode))?;
        written += 1;
    }
    Ok(written)
}

/// Tokenize and print one title. Returns true on success.
fn tokenize_title<W: Write>(
    tokenizer: &Tokenizer,
    title: &str,
    out: &mut W,
    mode: OutputMode,
) -> bool {
    match tokenizer.tokenize(title) {
        Ok(keywords) => {
            let formatted = format_keywords(title, &keywords, mode);
            formatted.is_empty() || writeln!(out, "{}", formatted).is_ok()
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyword_core::{Error, Limits};
    use keyword_store::CsvTitleSource;

    fn pipe(input: &str, tokenizer: &Tokenizer, mode: OutputMode) -> (i32, String) {
        let mut out = Vec::new();
        let code = run_pipe(tokenizer, input.as_bytes(), &mut out, mode);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_pipe_one_title_per_line() {
        let (code, out) = pipe("선반, NC\n\n120다산콜센터\n", &Tokenizer::new(), OutputMode::Raw);
        assert_eq!(code, 0);
        assert_eq!(out, "NC\n선반\n120\n120다산콜센터\n다산콜센터\n");
    }

    #[test]
    fn test_pipe_crlf_lines() {
        let (code, out) = pipe("선반, NC\r\n", &Tokenizer::new(), OutputMode::Raw);
        assert_eq!(code, 0);
        assert_eq!(out, "NC\n선반\n");
    }

    #[test]
    fn test_pipe_json_lines() {
        let (_, out) = pipe("선반\n가 나\n", &Tokenizer::new(), OutputMode::Json);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["title"], "가 나");
    }

    #[test]
    fn test_rejected_title_sets_exit_code_and_continues() {
        let tokenizer = Tokenizer::with_limits(Limits::with_small_limits());
        let long = "가 ".repeat(40);
        let titles = vec![long.as_str(), "선반"];
        let mut out = Vec::new();
        let code = run_titles(&tokenizer, titles, &mut out, OutputMode::Raw);
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "선반\n");
    }

    #[test]
    fn test_empty_keyword_set_prints_nothing_raw() {
        let mut out = Vec::new();
        let code = run_titles(&Tokenizer::new(), ["및"], &mut out, OutputMode::Raw);
        assert_eq!(code, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_echo_titles_raw() {
        let data = "1,x,\"선반, NC\"\n2\n3,y,유압 프레스\n";
        let source = CsvTitleSource::from_reader(data.as_bytes(), 2, false);
        let mut out = Vec::new();
        let written = echo_titles(source, &mut out, OutputMode::Raw).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "선반, NC\n유압 프레스\n");
    }

    #[test]
    fn test_echo_titles_json() {
        let data = "id,title\n1,\"say \"\"hi\"\"\"\n";
        let source = CsvTitleSource::from_reader(data.as_bytes(), 1, true);
        let mut out = Vec::new();
        echo_titles(source, &mut out, OutputMode::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\"say \\\"hi\\\"\"\n");
    }

    #[test]
    fn test_echo_titles_stops_on_bad_record() {
        let data: &[u8] = b"1,\xea\xb0\x80\n2,\xff\n3,\xeb\x82\x98\n";
        let source = CsvTitleSource::from_reader(data, 1, false);
        let mut out = Vec::new();
        let result = echo_titles(source, &mut out, OutputMode::Raw);
        assert!(matches!(result, Err(Error::Csv(_))));
        assert_eq!(String::from_utf8(out).unwrap(), "가\n");
    }
}
