use std::sync::Arc;

use tracing::debug;

use crate::classify::{Classifier, Direction, MarkClassifier};
use crate::codec::Codec;
use crate::error::CodecError;

/// Auto-direction conversion: classify the input, then encode or decode it.
#[derive(Clone)]
pub struct ConversionService {
    codec: Codec,
    classifier: Arc<dyn Classifier>,
}

impl ConversionService {
    pub fn new(codec: Codec, classifier: impl Classifier + 'static) -> Self {
        Self {
            codec,
            classifier: Arc::new(classifier),
        }
    }

    /// Service over `codec` using the [`MarkClassifier`] heuristic.
    pub fn with_codec(codec: Codec) -> Self {
        Self::new(codec, MarkClassifier)
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Direction chosen for `input`, `None` if it is blank.
    pub fn direction(&self, input: &str) -> Option<Direction> {
        self.classifier.classify(input)
    }

    /// Convert `input` in whichever direction it looks like it needs.
    ///
    /// Leading and trailing whitespace is trimmed first. Blank input fails
    /// with [`CodecError::EmptyInput`]; everything else is handed to the
    /// codec, whose recovery hook handles unknown units.
    pub fn convert(&self, input: &str) -> Result<String, CodecError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let direction = self.classifier.classify(trimmed).ok_or(CodecError::EmptyInput)?;
        debug!(%direction, len = trimmed.len(), "converting input");

        let output = match direction {
            Direction::Decode => self.codec.decode(trimmed)?,
            Direction::Encode => self.codec.encode(trimmed)?,
        };
        Ok(output)
    }
}

impl std::fmt::Debug for ConversionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
