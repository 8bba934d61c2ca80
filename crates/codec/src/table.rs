use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CodecError;

/// Shared, immutable symbol table.
///
/// Maps one symbol (a `char`) to its code, a short string of marks. Clones
/// share storage, so one table can back any number of codecs. Insertion order
/// is kept: it decides which symbol wins when two symbols share a code.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Symbols in insertion order
    symbols: Arc<[char]>,
    /// Symbol to code
    codes: Arc<HashMap<char, String>>,
}

impl SymbolTable {
    /// Create a table from `(symbol, code)` pairs.
    ///
    /// A repeated symbol keeps its first position but takes the later code.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut symbols = Vec::new();
        let mut codes = HashMap::new();
        for (symbol, code) in pairs {
            if codes.insert(symbol, code.into()).is_none() {
                symbols.push(symbol);
            }
        }

        Self {
            symbols: symbols.into(),
            codes: Arc::new(codes),
        }
    }

    /// Create a table from string keys, as found in configuration files.
    ///
    /// Every key must hold exactly one character.
    pub fn from_strings<I, K, V>(pairs: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut parsed = Vec::new();
        for (key, code) in pairs {
            let key = key.as_ref();
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => parsed.push((symbol, code.into())),
                _ => return Err(CodecError::InvalidSymbol(key.to_string())),
            }
        }
        Ok(Self::new(parsed))
    }

    /// International (Latin) table: A-Z, digits and common punctuation.
    pub fn international() -> Self {
        Self::new([
            ('A', ".-"),
            ('B', "-..."),
            ('C', "-.-."),
            ('D', "-.."),
            ('E', "."),
            ('F', "..-."),
            ('G', "--."),
            ('H', "...."),
            ('I', ".."),
            ('J', ".---"),
            ('K', "-.-"),
            ('L', ".-.."),
            ('M', "--"),
            ('N', "-."),
            ('O', "---"),
            ('P', ".--."),
            ('Q', "--.-"),
            ('R', ".-."),
            ('S', "..."),
            ('T', "-"),
            ('U', "..-"),
            ('V', "...-"),
            ('W', ".--"),
            ('X', "-..-"),
            ('Y', "-.--"),
            ('Z', "--.."),
            ('1', ".----"),
            ('2', "..---"),
            ('3', "...--"),
            ('4', "....-"),
            ('5', "....."),
            ('6', "-...."),
            ('7', "--..."),
            ('8', "---.."),
            ('9', "----."),
            ('0', "-----"),
            ('.', ".-.-.-"),
            (',', "--..--"),
            (':', "---..."),
            ('?', "..--.."),
            ('\'', ".----."),
            ('-', "-....-"),
            ('/', "-..-."),
            ('(', "-.--."),
            (')', "-.--.-"),
            ('"', ".-..-."),
        ])
    }

    /// Russian (Cyrillic) table.
    ///
    /// `Ь` and `Ъ` share `-..-`; decoding that code yields `Ъ`.
    pub fn russian() -> Self {
        Self::new([
            ('А', ".-"),
            ('Б', "-..."),
            ('В', ".--"),
            ('Г', "--."),
            ('Д', "-.."),
            ('Е', "."),
            ('Ж', "...-"),
            ('З', "--.."),
            ('И', ".."),
            ('Й', ".---"),
            ('К', "-.-"),
            ('Л', ".-.."),
            ('М', "--"),
            ('Н', "-."),
            ('О', "---"),
            ('П', ".--."),
            ('Р', ".-."),
            ('С', "..."),
            ('Т', "-"),
            ('У', "..-"),
            ('Ф', "..-."),
            ('Х', "...."),
            ('Ц', "-.-."),
            ('Ч', "---."),
            ('Ш', "----"),
            ('Щ', "--.-"),
            ('Ь', "-..-"),
            ('Ы', "-.--"),
            ('Ъ', "-..-"),
            ('Э', "..-.."),
            ('Ю', "..--"),
            ('Я', ".-.-"),
            ('1', ".----"),
            ('2', "..---"),
            ('3', "...--"),
            ('4', "....-"),
            ('5', "....."),
            ('6', "-...."),
            ('7', "--..."),
            ('8', "---.."),
            ('9', "----."),
            ('0', "-----"),
            ('.', "......"),
            (',', ".-.-.-"),
            (':', "---..."),
            ('?', "..--.."),
            ('\'', ".----."),
            ('-', "-....-"),
            ('/', "-..-."),
            ('(', "-.--."),
            (')', "-.--.-"),
            ('"', ".-..-."),
        ])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the code for a symbol (exact match, no case folding).
    #[inline]
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Iterate `(symbol, code)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.symbols
            .iter()
            .map(move |&symbol| (symbol, self.codes[&symbol].as_str()))
    }

    /// Check the table is usable by a codec: non-empty, no empty codes.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.is_empty() {
            return Err(CodecError::EmptyTable);
        }
        match self.iter().find(|(_, code)| code.is_empty()) {
            Some((symbol, _)) => Err(CodecError::EmptyCode(symbol)),
            None => Ok(()),
        }
    }

    /// Build the code to symbol mapping. The last symbol claiming a code wins.
    pub fn inverse(&self) -> HashMap<String, char> {
        let mut inverse = HashMap::with_capacity(self.len());
        for (symbol, code) in self.iter() {
            inverse.insert(code.to_string(), symbol);
        }
        inverse
    }

    /// Fail on the first code claimed by more than one symbol.
    pub fn check_unique(&self) -> Result<(), CodecError> {
        let mut seen: HashMap<&str, char> = HashMap::with_capacity(self.len());
        for (symbol, code) in self.iter() {
            if let Some(first) = seen.insert(code, symbol) {
                return Err(CodecError::AmbiguousCode {
                    code: code.to_string(),
                    first,
                    second: symbol,
                });
            }
        }
        Ok(())
    }

    /// Codes claimed by more than one symbol, with their symbols in insertion order.
    pub fn collisions(&self) -> Vec<(String, Vec<char>)> {
        let mut by_code: Vec<(String, Vec<char>)> = Vec::new();
        for (symbol, code) in self.iter() {
            match by_code.iter_mut().find(|(c, _)| c == code) {
                Some((_, symbols)) => symbols.push(symbol),
                None => by_code.push((code.to_string(), vec![symbol])),
            }
        }
        by_code.retain(|(_, symbols)| symbols.len() > 1);
        by_code
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::international()
    }
}

impl PartialEq for SymbolTable {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.symbols, &other.symbols) && Arc::ptr_eq(&self.codes, &other.codes))
            || (self.symbols == other.symbols && self.codes == other.codes)
    }
}

impl Eq for SymbolTable {}
