//! Shared default values for the command-line front end.

/// Directory converted files are written to.
pub const OUT_DIR: &str = ".";

/// UTC timestamp prefix of converted file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%SZ";
