use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{CodecError, NoEncodingError};
use crate::recovery::{Ignore, RecoveryHook};
use crate::table::SymbolTable;

/// Average code length in the shipped tables, used to pre-size output buffers.
const AVERAGE_CODE_LEN: f64 = 4.53;

/// Code assumed for the space character when the table has none.
const SPACE_CODE: &str = " ";

/// Bidirectional symbol/code converter.
///
/// Built once through [`CodecBuilder`], then shared freely: every method takes
/// `&self` and clones share the underlying tables.
///
/// # Examples
///
/// ```
/// use dotdash_codec::{Codec, SymbolTable};
///
/// let codec = Codec::builder(SymbolTable::international())
///     .case_fold(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(codec.encode("sos").unwrap(), "... --- ...");
/// assert_eq!(codec.decode("... --- ...").unwrap(), "SOS");
/// ```
#[derive(Clone)]
pub struct Codec {
    table: SymbolTable,
    inverse: Arc<HashMap<String, char>>,
    char_separator: String,
    word_separator: String,
    case_fold: bool,
    trailing_separator: bool,
    hook: Arc<dyn RecoveryHook>,
}

impl Codec {
    /// Start configuring a codec over `table`.
    pub fn builder(table: SymbolTable) -> CodecBuilder {
        CodecBuilder::new(table)
    }

    /// Codec over `table` with builder defaults.
    pub fn new(table: SymbolTable) -> Result<Self, CodecError> {
        CodecBuilder::new(table).build()
    }

    /// The default configuration: international table, `" "` between codes,
    /// `"   "` between words, case folding on, no trailing separator, unknown
    /// units dropped.
    pub fn standard() -> Result<Self, CodecError> {
        Self::builder(SymbolTable::international())
            .char_separator(" ")
            .word_separator("   ")
            .case_fold(true)
            .recovery_hook(Ignore)
            .trailing_separator(false)
            .build()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn char_separator(&self) -> &str {
        &self.char_separator
    }

    /// Configured word separator.
    ///
    /// Note that [`decode`](Self::decode) does not split on this value; it
    /// always splits words on `char_separator + " " + char_separator`.
    pub fn word_separator(&self) -> &str {
        &self.word_separator
    }

    pub fn case_fold(&self) -> bool {
        self.case_fold
    }

    pub fn trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Encode text into codes, one code per character.
    ///
    /// Characters missing from the table go through the recovery hook. The
    /// only error is one raised by the hook itself.
    pub fn encode(&self, text: &str) -> Result<String, NoEncodingError> {
        let mut out = String::with_capacity((text.len() as f64 * AVERAGE_CODE_LEN) as usize);

        for ch in text.chars() {
            let ch = if self.case_fold { fold_upper(ch) } else { ch };

            match self.table.code(ch) {
                Some(code) => {
                    out.push_str(code);
                    out.push_str(&self.char_separator);
                }
                None => {
                    let mut buf = [0u8; 4];
                    self.recover(ch.encode_utf8(&mut buf), &mut out)?;
                }
            }
        }

        self.strip_trailing(&mut out);
        Ok(out)
    }

    /// Decode codes back into text.
    ///
    /// Words are split on `char_separator + " " + char_separator` and each
    /// decoded word is followed by one space. Code groups missing from the
    /// table, including empty ones, go through the recovery hook.
    pub fn decode(&self, code: &str) -> Result<String, NoEncodingError> {
        let mut out = String::with_capacity((code.len() as f64 / AVERAGE_CODE_LEN) as usize);
        let boundary = format!("{0}{1}{0}", self.char_separator, SPACE_CODE);

        for word in code.split(boundary.as_str()) {
            for group in split_groups(word, &self.char_separator) {
                match self.inverse.get(group) {
                    Some(&symbol) => out.push(symbol),
                    None => self.recover(group, &mut out)?,
                }
            }
            out.push(' ');
        }

        self.strip_trailing(&mut out);
        Ok(out)
    }

    fn recover(&self, unit: &str, out: &mut String) -> Result<(), NoEncodingError> {
        trace!(unit, "no table entry, consulting recovery hook");
        let replacement = self.hook.recover(&NoEncodingError::new(unit))?;
        if !replacement.is_empty() {
            out.push_str(&replacement);
            out.push_str(&self.char_separator);
        }
        Ok(())
    }

    /// Drop one separator-length suffix, counted in chars.
    fn strip_trailing(&self, out: &mut String) {
        if self.trailing_separator {
            return;
        }
        let len = self.char_separator.chars().count();
        if out.chars().rev().take(len).count() == len {
            for _ in 0..len {
                out.pop();
            }
        }
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("symbols", &self.table.len())
            .field("char_separator", &self.char_separator)
            .field("word_separator", &self.word_separator)
            .field("case_fold", &self.case_fold)
            .field("trailing_separator", &self.trailing_separator)
            .finish_non_exhaustive()
    }
}

/// Upper-case `ch` when that yields exactly one character.
fn fold_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}

/// Split a word into code groups. An empty separator splits per character.
fn split_groups<'a>(word: &'a str, separator: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    if separator.is_empty() {
        Box::new(
            word.char_indices()
                .map(move |(i, c)| &word[i..i + c.len_utf8()]),
        )
    } else {
        Box::new(word.split(separator))
    }
}

/// Builder for [`Codec`].
///
/// Setters may be called in any order and any number of times; the last call
/// wins. The word separator, unless set to a non-empty value, is derived once
/// in [`build`](Self::build) from the final character separator.
#[derive(Clone)]
pub struct CodecBuilder {
    table: SymbolTable,
    char_separator: String,
    word_separator: Option<String>,
    case_fold: bool,
    trailing_separator: bool,
    strict: bool,
    hook: Arc<dyn RecoveryHook>,
}

impl CodecBuilder {
    pub fn new(table: SymbolTable) -> Self {
        Self {
            table,
            char_separator: " ".to_string(),
            word_separator: None,
            case_fold: false,
            trailing_separator: false,
            strict: false,
            hook: Arc::new(Ignore),
        }
    }

    /// Separator between consecutive codes (default: `" "`).
    pub fn char_separator(mut self, separator: impl Into<String>) -> Self {
        self.char_separator = separator.into();
        self
    }

    /// Separator between words (default: derived from the char separator and
    /// the table's code for `' '`). An empty separator counts as unset.
    pub fn word_separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = Some(separator.into());
        self
    }

    /// Upper-case symbols before lookup (default: off).
    pub fn case_fold(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Keep the separator after the last unit (default: off).
    pub fn trailing_separator(mut self, trailing_separator: bool) -> Self {
        self.trailing_separator = trailing_separator;
        self
    }

    /// Reject tables in which two symbols share a code (default: off, the
    /// last symbol wins on decode).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Handler for units without a table entry (default: [`Ignore`]).
    pub fn recovery_hook(mut self, hook: impl RecoveryHook + 'static) -> Self {
        self.hook = Arc::new(hook);
        self
    }

    pub fn build(self) -> Result<Codec, CodecError> {
        self.table.validate()?;
        if self.strict {
            self.table.check_unique()?;
        }

        let word_separator = match self.word_separator.filter(|s| !s.is_empty()) {
            Some(separator) => separator,
            None => {
                let space = self.table.code(' ').unwrap_or(SPACE_CODE);
                format!("{0}{1}{0}", self.char_separator, space)
            }
        };
        let inverse = self.table.inverse();

        debug!(
            symbols = self.table.len(),
            char_separator = ?self.char_separator,
            word_separator = ?word_separator,
            case_fold = self.case_fold,
            trailing_separator = self.trailing_separator,
            "built codec"
        );

        Ok(Codec {
            table: self.table,
            inverse: Arc::new(inverse),
            char_separator: self.char_separator,
            word_separator,
            case_fold: self.case_fold,
            trailing_separator: self.trailing_separator,
            hook: self.hook,
        })
    }
}
