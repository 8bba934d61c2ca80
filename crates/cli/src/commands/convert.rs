use anyhow::{Context, Result};
use chrono::Utc;
use dotdash_codec::ConversionService;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::defaults::TIMESTAMP_FORMAT;

/// Convert stdin to stdout in whichever direction it needs.
pub fn convert_stdin(service: &ConversionService, input: &str) -> Result<()> {
    let output = service.convert(input).context("Failed to convert input")?;
    println!("{output}");
    Ok(())
}

/// Convert each file in parallel, writing results into `out_dir`.
///
/// Output files are named `<UTC timestamp>-<stem><ext>` after their input.
/// Inputs that would share a name get a `-2`, `-3`, ... suffix on the stem.
pub fn convert_files(service: &ConversionService, files: &[PathBuf], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let stamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    let names = output_names(files, &stamp);

    let written: Vec<PathBuf> = files
        .par_iter()
        .zip(names.par_iter())
        .map(|(path, name)| convert_file(service, path, &out_dir.join(name)))
        .collect::<Result<_>>()?;

    for path in &written {
        println!("✓ Converted to: {}", path.display());
    }

    Ok(())
}

fn convert_file(service: &ConversionService, path: &Path, output: &Path) -> Result<PathBuf> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let converted = service
        .convert(&data)
        .with_context(|| format!("Failed to convert {}", path.display()))?;

    fs::write(output, converted)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(input = %path.display(), output = %output.display(), "converted file");
    Ok(output.to_path_buf())
}

/// `<stamp>-<stem><ext>`, keeping the input's extension if it has one.
pub fn output_name(path: &Path, stamp: &str) -> String {
    let (stem, ext) = split_name(path);
    format!("{stamp}-{stem}{ext}")
}

/// One distinct output name per input, in input order.
pub fn output_names(files: &[PathBuf], stamp: &str) -> Vec<String> {
    let mut taken = HashSet::with_capacity(files.len());
    files
        .iter()
        .map(|path| {
            let mut name = output_name(path, stamp);
            if taken.contains(&name) {
                let (stem, ext) = split_name(path);
                let mut index = 2;
                while taken.contains(&name) {
                    name = format!("{stamp}-{stem}-{index}{ext}");
                    index += 1;
                }
            }
            taken.insert(name.clone());
            name
        })
        .collect()
}

fn split_name(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, ext)
}
