use anyhow::{Context, Result};
use dotdash_codec::{Codec, CodecConfig};
use tracing::warn;

/// Print the active table, one `symbol<TAB>code` per line.
pub fn show_table(codec: &Codec) -> Result<()> {
    let table = codec.table();

    for (code, symbols) in table.collisions() {
        let decoded = symbols.last().copied().unwrap_or_default();
        warn!(code = %code, ?symbols, %decoded, "code shared by several symbols");
    }

    for (symbol, code) in table.iter() {
        println!("{symbol}\t{code}");
    }

    Ok(())
}

/// Print the effective configuration as JSON.
pub fn show_config(config: &CodecConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{json}");
    Ok(())
}
