use anyhow::{Context, Result};
use clap::Args;
use dotdash_codec::{CodecConfig, RecoveryMode, TableKind};
use std::fs;
use std::path::PathBuf;

/// Codec settings shared by every subcommand.
///
/// Flags override values loaded from `--config`, which in turn override the
/// standard codec.
#[derive(Args, Debug, Clone, Default)]
pub struct CodecArgs {
    /// JSON file with codec settings
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Built-in symbol table (international, russian)
    #[arg(long, global = true)]
    pub table: Option<TableKind>,

    /// Separator between codes
    #[arg(long, global = true, value_name = "SEP", allow_hyphen_values = true)]
    pub char_separator: Option<String>,

    /// Separator between words (derived from the char separator if unset)
    #[arg(long, global = true, value_name = "SEP", allow_hyphen_values = true)]
    pub word_separator: Option<String>,

    /// Look symbols up exactly as written instead of upper-casing them
    #[arg(long, global = true)]
    pub no_case_fold: bool,

    /// Keep the separator after the last unit
    #[arg(long, global = true)]
    pub trailing_separator: bool,

    /// What to do with symbols or codes missing from the table (ignore, echo, strict)
    #[arg(long, global = true, value_name = "MODE")]
    pub on_unknown: Option<RecoveryMode>,

    /// Refuse tables in which two symbols share a code
    #[arg(long, global = true)]
    pub strict_table: bool,
}

impl CodecArgs {
    /// Merge the config file (if any) and the flags into one configuration.
    pub fn resolve(&self) -> Result<CodecConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => CodecConfig::default(),
        };

        if let Some(table) = self.table {
            config.table = table;
            config.symbols = None;
        }
        if let Some(separator) = &self.char_separator {
            config.char_separator = separator.clone();
            // A separator given without a word separator re-derives the latter.
            if self.word_separator.is_none() {
                config.word_separator = None;
            }
        }
        if let Some(separator) = &self.word_separator {
            config.word_separator = Some(separator.clone());
        }
        if self.no_case_fold {
            config.case_fold = false;
        }
        if self.trailing_separator {
            config.trailing_separator = true;
        }
        if let Some(mode) = self.on_unknown {
            config.on_unknown = mode;
        }
        if self.strict_table {
            config.strict_table = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_flags_is_standard() {
        let config = CodecArgs::default().resolve().unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let args = CodecArgs {
            table: Some(TableKind::Russian),
            char_separator: Some("|".to_string()),
            no_case_fold: true,
            on_unknown: Some(RecoveryMode::Strict),
            ..CodecArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.table, TableKind::Russian);
        assert_eq!(config.char_separator, "|");
        assert_eq!(config.word_separator, None);
        assert!(!config.case_fold);
        assert_eq!(config.on_unknown, RecoveryMode::Strict);
    }

    #[test]
    fn test_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "on_unknown": "echo", "trailing_separator": true }}"#).unwrap();

        let args = CodecArgs {
            config: Some(file.path().to_path_buf()),
            on_unknown: Some(RecoveryMode::Ignore),
            ..CodecArgs::default()
        };
        let config = args.resolve().unwrap();
        assert!(config.trailing_separator);
        assert_eq!(config.on_unknown, RecoveryMode::Ignore);
    }

    #[test]
    fn test_bad_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let args = CodecArgs {
            config: Some(file.path().to_path_buf()),
            ..CodecArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
