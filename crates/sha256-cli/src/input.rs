//! # Message Input
//!
//! Shared argument group for subcommands that hash a message. A message
//! comes from exactly one source: a TEXT argument (hashed as UTF-8), the raw
//! bytes of `--file`, or standard input when neither is given.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

/// Where the message to hash comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to hash, encoded as UTF-8.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Hash the raw bytes of this file instead of TEXT.
    #[arg(long, short, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Which source a message was read from, for log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Command-line TEXT argument.
    Text,
    /// `--file` path.
    File,
    /// Standard input.
    Stdin,
}

impl InputArgs {
    /// Read the message bytes, falling back to `stdin`.
    ///
    /// # Errors
    ///
    /// Fails if both TEXT and `--file` are given, or if the file or stdin
    /// cannot be read.
    pub fn read_message(&self, mut stdin: impl Read) -> Result<(InputSource, Vec<u8>)> {
        match (&self.text, &self.file) {
            (Some(_), Some(_)) => bail!("pass either TEXT or --file, not both"),
            (Some(text), None) => Ok((InputSource::Text, text.as_bytes().to_vec())),
            (None, Some(path)) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("failed to read file: {}", path.display()))?;
                Ok((InputSource::File, bytes))
            }
            (None, None) => {
                let mut bytes = Vec::new();
                stdin
                    .read_to_end(&mut bytes)
                    .context("failed to read standard input")?;
                Ok((InputSource::Stdin, bytes))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_takes_priority_over_stdin() {
        let args = InputArgs {
            text: Some("abc".into()),
            file: None,
        };
        let (source, bytes) = args.read_message(&b"ignored"[..]).unwrap();
        assert_eq!(source, InputSource::Text);
        assert_eq!(bytes, b"abc");
    }

    #[test]
    fn reads_file_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.bin");
        std::fs::write(&path, [0xffu8, 0x00, 0x80]).unwrap();
        let args = InputArgs {
            text: None,
            file: Some(path),
        };
        let (source, bytes) = args.read_message(std::io::empty()).unwrap();
        assert_eq!(source, InputSource::File);
        assert_eq!(bytes, vec![0xff, 0x00, 0x80]);
    }

    #[test]
    fn falls_back_to_stdin() {
        let (source, bytes) = InputArgs::default()
            .read_message(&b"from stdin"[..])
            .unwrap();
        assert_eq!(source, InputSource::Stdin);
        assert_eq!(bytes, b"from stdin");
    }

    #[test]
    fn rejects_text_and_file_together() {
        let args = InputArgs {
            text: Some("abc".into()),
            file: Some(PathBuf::from("message.bin")),
        };
        assert!(args.read_message(std::io::empty()).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let args = InputArgs {
            text: None,
            file: Some(path),
        };
        let err = args.read_message(std::io::empty()).unwrap_err();
        assert!(format!("{err:#}").contains("absent.txt"));
    }
}
