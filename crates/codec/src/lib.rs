//! Dot/dash signal alphabet codec.
//!
//! Converts text to codes and back through a [`SymbolTable`], with
//! configurable separators, case folding and a pluggable [`RecoveryHook`] for
//! units the table does not cover. [`ConversionService`] adds direction
//! detection for unlabeled input.
//!
//! ```
//! assert_eq!(dotdash_codec::encode("SOS"), "... --- ...");
//! assert_eq!(dotdash_codec::decode("... --- ..."), "SOS");
//! assert_eq!(dotdash_codec::convert("... --- ...").unwrap(), "SOS");
//! ```

mod classify;
mod codec;
mod config;
mod error;
mod recovery;
mod service;
mod table;

pub use classify::{classify, Classifier, Direction, MarkClassifier};
pub use codec::{Codec, CodecBuilder};
pub use config::{CodecConfig, RecoveryMode, TableKind};
pub use error::{CodecError, NoEncodingError};
pub use recovery::{Echo, Ignore, RecoveryHook, Strict};
pub use service::ConversionService;
pub use table::SymbolTable;

use once_cell::sync::Lazy;

/// The standard codec, see [`Codec::standard`].
pub static DEFAULT_CODEC: Lazy<Codec> =
    Lazy::new(|| Codec::standard().expect("international table is non-empty"));

/// Auto-direction service over [`DEFAULT_CODEC`].
pub static DEFAULT_SERVICE: Lazy<ConversionService> =
    Lazy::new(|| ConversionService::with_codec(DEFAULT_CODEC.clone()));

/// Encode with the standard codec. Unknown characters are dropped.
pub fn encode(text: &str) -> String {
    // Ignore never fails.
    DEFAULT_CODEC.encode(text).unwrap_or_default()
}

/// Decode with the standard codec. Unknown codes are dropped.
pub fn decode(code: &str) -> String {
    DEFAULT_CODEC.decode(code).unwrap_or_default()
}

/// Classify and convert with the standard codec.
pub fn convert(input: &str) -> Result<String, CodecError> {
    DEFAULT_SERVICE.convert(input)
}
