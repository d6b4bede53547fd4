//! Reading printed chains back in.
//!
//! Parses the JSON written by `--format json` into an unvalidated [`Chain`].
//! Whether the blocks still add up is for [`Chain::validate`] to say.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use linkchain::{Block, Chain};

#[derive(Debug, Deserialize)]
struct ChainFile {
    blocks: Vec<Block>,
}

/// Parse a JSON rendering into an unvalidated chain.
pub fn parse(json: &str) -> Result<Chain> {
    let file: ChainFile = serde_json::from_str(json).context("malformed chain JSON")?;
    Chain::from_untrusted_blocks(file.blocks).context("chain file holds no blocks")
}

/// Read and parse a chain file.
pub fn load(path: &Path) -> Result<Chain> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read chain file {}", path.display()))?;
    parse(&json).with_context(|| format!("failed to load chain from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, render_json, OutputFormat};
    use crate::session;
    use std::io::Cursor;
    use linkchain::ViolationKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_chain(dir: &TempDir, chain: &Chain) -> std::path::PathBuf {
        let path = dir.path().join("chain.json");
        let mut buf = Vec::new();
        render_json(chain, &mut buf).unwrap();
        fs::write(&path, buf).unwrap();
        path
    }

    #[test]
    fn printed_chain_loads_and_validates() -> Result<()> {
        let dir = TempDir::new()?;
        let mut chain = Chain::new();
        chain.append("Hello")?;
        chain.append("World")?;

        let loaded = load(&write_chain(&dir, &chain))?;
        assert_eq!(loaded.blocks(), chain.blocks());
        assert!(loaded.validate().is_ok());
        Ok(())
    }

    #[test]
    fn edited_file_fails_validation() -> Result<()> {
        let dir = TempDir::new()?;
        let mut chain = Chain::new();
        chain.append("pay 5")?;
        let path = write_chain(&dir, &chain);

        let edited = fs::read_to_string(&path)?.replace("pay 5", "pay 500");
        fs::write(&path, edited)?;

        let violation = load(&path)?.validate().unwrap_err();
        assert_eq!(violation.kind(), ViolationKind::ContentTamper);
        assert_eq!(violation.index(), 1);
        Ok(())
    }

    #[test]
    fn empty_block_list_is_rejected() {
        let err = parse(r#"{"blocks": []}"#).unwrap_err();
        assert!(err.to_string().contains("no blocks"));
    }

    #[test]
    fn bad_identifier_is_rejected() {
        let json = r#"{"blocks": [{"content": "x", "previous_identifier": "00000000", "identifier": "zz"}]}"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load(Path::new("/nonexistent/linkchain.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/linkchain.json"));
    }

    #[test]
    fn json_session_output_reads_back() -> Result<()> {
        let mut chain = Chain::new();
        let mut prompts = Vec::new();
        let mut stdout = Vec::new();
        session::interactive(&mut chain, &mut Cursor::new("Hello\nn\n"), &mut prompts)?;
        render(&chain, OutputFormat::Json, &mut stdout)?;

        let loaded = parse(std::str::from_utf8(&stdout)?)?;
        assert_eq!(loaded.blocks(), chain.blocks());
        assert!(loaded.validate().is_ok());
        assert!(String::from_utf8(prompts)?.contains("Enter data for block 1: "));
        Ok(())
    }
}
