use crate::error::NoEncodingError;

/// Decides what replaces a unit that has no table entry.
///
/// Called once per unknown symbol (encode) or code group (decode). The
/// returned string is emitted in place of the unit; an empty string drops it
/// without leaving a separator behind. Returning `Err` aborts the conversion.
///
/// Hooks are shared by every caller of a codec and must not depend on
/// mutable state they do not synchronize themselves.
pub trait RecoveryHook: Send + Sync {
    fn recover(&self, err: &NoEncodingError) -> Result<String, NoEncodingError>;
}

impl<F> RecoveryHook for F
where
    F: Fn(&NoEncodingError) -> Result<String, NoEncodingError> + Send + Sync,
{
    fn recover(&self, err: &NoEncodingError) -> Result<String, NoEncodingError> {
        self(err)
    }
}

/// Drops unknown units silently. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl RecoveryHook for Ignore {
    fn recover(&self, _err: &NoEncodingError) -> Result<String, NoEncodingError> {
        Ok(String::new())
    }
}

/// Emits the unknown unit literally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Echo;

impl RecoveryHook for Echo {
    fn recover(&self, err: &NoEncodingError) -> Result<String, NoEncodingError> {
        Ok(err.unit.clone())
    }
}

/// Fails the whole conversion on the first unknown unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl RecoveryHook for Strict {
    fn recover(&self, err: &NoEncodingError) -> Result<String, NoEncodingError> {
        Err(err.clone())
    }
}
