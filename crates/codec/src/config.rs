use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::Codec;
use crate::error::CodecError;
use crate::recovery::{Echo, Ignore, Strict};
use crate::table::SymbolTable;

/// Shipped symbol tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Latin letters, digits, punctuation.
    #[default]
    International,
    /// Cyrillic letters, digits, punctuation.
    Russian,
}

impl TableKind {
    pub fn table(&self) -> SymbolTable {
        match self {
            Self::International => SymbolTable::international(),
            Self::Russian => SymbolTable::russian(),
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::International => write!(f, "international"),
            Self::Russian => write!(f, "russian"),
        }
    }
}

impl std::str::FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "international" | "latin" => Ok(Self::International),
            "russian" | "cyrillic" => Ok(Self::Russian),
            _ => Err(format!(
                "Unknown symbol table: {s}. Available: international, russian"
            )),
        }
    }
}

/// Shipped recovery hooks, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryMode {
    /// Drop unknown units.
    #[default]
    Ignore,
    /// Emit unknown units unchanged.
    Echo,
    /// Fail on the first unknown unit.
    Strict,
}

impl std::fmt::Display for RecoveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Echo => write!(f, "echo"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for RecoveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "echo" => Ok(Self::Echo),
            "strict" => Ok(Self::Strict),
            _ => Err(format!(
                "Unknown recovery mode: {s}. Available: ignore, echo, strict"
            )),
        }
    }
}

/// Serializable codec configuration.
///
/// Missing fields take the values of the standard codec. A missing
/// `word_separator` is left unset and derived from `char_separator` at build
/// time, so an empty JSON object still builds [`Codec::standard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Shipped table to use when `symbols` is not given
    pub table: TableKind,
    /// Custom table, symbol to code; replaces `table` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<BTreeMap<String, String>>,
    pub char_separator: String,
    /// Derived from `char_separator` when absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_separator: Option<String>,
    pub case_fold: bool,
    pub trailing_separator: bool,
    pub on_unknown: RecoveryMode,
    /// Reject tables in which two symbols share a code
    pub strict_table: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            table: TableKind::International,
            symbols: None,
            char_separator: " ".to_string(),
            word_separator: Some("   ".to_string()),
            case_fold: true,
            trailing_separator: false,
            on_unknown: RecoveryMode::Ignore,
            strict_table: false,
        }
    }
}

impl CodecConfig {
    /// Resolve the symbol table this configuration selects.
    pub fn symbol_table(&self) -> Result<SymbolTable, CodecError> {
        match &self.symbols {
            Some(symbols) => SymbolTable::from_strings(symbols),
            None => Ok(self.table.table()),
        }
    }

    pub fn build(&self) -> Result<Codec, CodecError> {
        let mut builder = Codec::builder(self.symbol_table()?)
            .char_separator(self.char_separator.as_str())
            .case_fold(self.case_fold)
            .trailing_separator(self.trailing_separator)
            .strict(self.strict_table);

        if let Some(separator) = &self.word_separator {
            builder = builder.word_separator(separator.as_str());
        }

        builder = match self.on_unknown {
            RecoveryMode::Ignore => builder.recovery_hook(Ignore),
            RecoveryMode::Echo => builder.recovery_hook(Echo),
            RecoveryMode::Strict => builder.recovery_hook(Strict),
        };

        builder.build()
    }
}
