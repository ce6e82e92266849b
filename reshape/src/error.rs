use std::{any, error::Error as StdError};
use thiserror::Error;

/// The error returned by [`try_convert`](crate::Record::try_convert) when some slot of a record
/// cannot be converted into its target type.
///
/// Conversion proceeds front to back and stops at the first failure, so the reported slot is the
/// lowest-indexed one that failed; nothing after it was attempted.
///
/// # Examples
///
/// ```
/// use reshape::Record;
///
/// let attempt = (7_i64, -1_i64).try_convert::<(u8, u8)>();
/// let error = attempt.unwrap_err();
/// assert_eq!(error.index(), 1);
/// assert_eq!(error.target(), "u8");
/// assert_eq!(error.to_string(), "slot 1 could not be converted to `u8`");
/// ```
#[derive(Debug, Error)]
#[error("slot {index} could not be converted to `{target}`")]
pub struct ConvertError {
    index: usize,
    target: &'static str,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl ConvertError {
    /// Construct the error for a failed conversion of slot `index` into the type `Target`.
    pub fn new<Target: ?Sized>(
        index: usize,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        ConvertError {
            index,
            target: any::type_name::<Target>(),
            source: Box::new(source),
        }
    }

    /// The index of the slot which failed to convert.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The name of the type the slot was being converted to.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Recover the underlying conversion error.
    pub fn into_source(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn source_is_preserved() {
        let cause = u8::try_from(256_u16).unwrap_err();
        let error = ConvertError::new::<u8>(3, cause);
        assert!(error.source().is_some());
        assert_eq!(error.into_source().to_string(), cause.to_string());
    }
}
