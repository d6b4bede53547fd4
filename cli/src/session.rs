//! Input drivers: the interactive prompt loop and line-per-block batch
//! ingestion. Both only ever call [`Chain::append`]; the chain does the rest.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use linkchain::Chain;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator answered something other than `y`.
    Declined,
    /// The chain reached its configured block limit.
    CapacityReached,
    /// Input ran out.
    EndOfInput,
}

/// Prompt for block contents until the operator declines, input ends, or
/// the chain is full.
///
/// Each round prints `Enter data for block <n>: `, appends the line read
/// (without its line ending), then asks `Add another block? (y/n): `.
/// The question is asked even when that append filled the chain; a `y`
/// then ends the session with [`SessionEnd::CapacityReached`]. Returns
/// how many blocks were appended and why the loop stopped.
pub fn interactive<R: BufRead, W: Write>(
    chain: &mut Chain,
    input: &mut R,
    out: &mut W,
) -> io::Result<(usize, SessionEnd)> {
    let mut appended = 0;
    let mut line = String::new();

    loop {
        if chain.is_full() {
            return Ok((appended, SessionEnd::CapacityReached));
        }

        write!(out, "\nEnter data for block {}: ", chain.len())?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok((appended, SessionEnd::EndOfInput));
        }
        if chain.append(trim_line_ending(&line)).is_err() {
            return Ok((appended, SessionEnd::CapacityReached));
        }
        appended += 1;

        write!(out, "Add another block? (y/n): ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok((appended, SessionEnd::EndOfInput));
        }
        if !matches!(line.trim_start().chars().next(), Some('y' | 'Y')) {
            return Ok((appended, SessionEnd::Declined));
        }
    }
}

/// Append every line of `input` as its own block, in order. Line endings
/// (`\n` or `\r\n`) are stripped; any other `\r` stays in the content.
///
/// Fails on the first line the chain refuses; blocks appended before that
/// line stay in the chain.
pub fn ingest_lines<R: BufRead>(chain: &mut Chain, input: R) -> Result<usize> {
    let mut appended = 0;
    for (number, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", number + 1))?;
        chain
            .append(line)
            .with_context(|| format!("cannot append input line {}", number + 1))?;
        appended += 1;
    }
    info!(appended, blocks = chain.len(), "batch ingested");
    Ok(appended)
}

fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or_else(|| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkchain::{ChainConfig, ChainError};
    use std::io::Cursor;

    fn run_session(chain: &mut Chain, script: &str) -> (usize, SessionEnd, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let (n, end) = interactive(chain, &mut input, &mut out).unwrap();
        (n, end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn session_appends_until_declined() {
        let mut chain = Chain::new();
        let (n, end, out) = run_session(&mut chain, "Hello\ny\nWorld\nn\n");

        assert_eq!(n, 2);
        assert_eq!(end, SessionEnd::Declined);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.tip().content(), "World");
        assert!(out.contains("Enter data for block 1: "));
        assert!(out.contains("Enter data for block 2: "));
        assert_eq!(out.matches("Add another block? (y/n): ").count(), 2);
        assert!(chain.validate().is_ok());
    }

    #[test]
    fn session_stops_at_capacity() {
        let mut chain = Chain::with_config(ChainConfig::default().with_max_blocks(3));
        let (n, end, out) = run_session(&mut chain, "a\ny\nb\ny\nc\ny\n");

        assert_eq!(n, 2);
        assert_eq!(end, SessionEnd::CapacityReached);
        assert_eq!(chain.len(), 3);
        assert!(!out.contains("Enter data for block 3"));
        assert_eq!(out.matches("Add another block? (y/n): ").count(), 2);
    }

    #[test]
    fn filling_append_still_asks_to_continue() {
        let mut chain = Chain::with_config(ChainConfig::default().with_max_blocks(2));
        let (n, end, out) = run_session(&mut chain, "last
n
");

        assert_eq!((n, end), (1, SessionEnd::Declined));
        assert!(out.ends_with("Add another block? (y/n): "));
    }

    #[test]
    fn session_handles_end_of_input() {
        let mut chain = Chain::new();
        let (n, end, _) = run_session(&mut chain, "only\n");
        assert_eq!((n, end), (1, SessionEnd::EndOfInput));

        let mut chain = Chain::new();
        let (n, end, _) = run_session(&mut chain, "");
        assert_eq!((n, end), (0, SessionEnd::EndOfInput));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn session_keeps_empty_and_crlf_lines() {
        let mut chain = Chain::new();
        run_session(&mut chain, "\r\nY\nsecond\r\nno\r\n");
        assert_eq!(chain.blocks()[1].content(), "");
        assert_eq!(chain.blocks()[2].content(), "second");
    }

    #[test]
    fn batch_appends_each_line() {
        let mut chain = Chain::new();
        let n = ingest_lines(&mut chain, Cursor::new("one\ntwo\r\n\nfour")).unwrap();

        assert_eq!(n, 4);
        let contents: Vec<&str> = chain.iter().skip(1).map(|b| b.content()).collect();
        assert_eq!(contents, ["one", "two", "", "four"]);
    }

    #[test]
    fn batch_keeps_stray_carriage_returns() {
        let mut chain = Chain::new();
        ingest_lines(&mut chain, Cursor::new("ends in cr\r\r\nmid\rline\n")).unwrap();

        assert_eq!(chain.blocks()[1].content(), "ends in cr\r");
        assert_eq!(chain.blocks()[2].content(), "mid\rline");
    }

    #[test]
    fn batch_reports_the_refused_line() {
        let mut chain = Chain::with_config(ChainConfig::default().with_max_blocks(2));
        let err = ingest_lines(&mut chain, Cursor::new("one\ntwo\n")).unwrap_err();

        assert!(err.to_string().contains("line 2"));
        assert_eq!(
            err.downcast_ref::<ChainError>(),
            Some(&ChainError::CapacityExceeded { limit: 2 })
        );
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn trims_only_line_endings() {
        assert_eq!(trim_line_ending("  padded  \n"), "  padded  ");
        assert_eq!(trim_line_ending("crlf\r\n"), "crlf");
        assert_eq!(trim_line_ending("bare"), "bare");
    }
}
