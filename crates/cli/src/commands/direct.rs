use anyhow::{Context, Result};
use dotdash_codec::{Codec, CodecError, ConversionService};

pub fn encode_text(codec: &Codec, text: &str) -> Result<()> {
    let output = codec.encode(text).context("Failed to encode")?;
    println!("{output}");
    Ok(())
}

pub fn decode_code(codec: &Codec, code: &str) -> Result<()> {
    let output = codec.decode(code).context("Failed to decode")?;
    println!("{output}");
    Ok(())
}

/// Print the direction auto-conversion would take.
pub fn show_direction(service: &ConversionService, input: &str) -> Result<()> {
    match service.direction(input) {
        Some(direction) => {
            println!("{direction}");
            Ok(())
        }
        None => Err(CodecError::EmptyInput.into()),
    }
}
