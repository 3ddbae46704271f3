use serde::{Serialize, Serializer};
use std::fmt;

/// Number of trailing characters left readable in log output.
const VISIBLE_TAIL: usize = 2;

/// Wraps passenger identifiers (passport numbers, phone numbers) so that
/// `tracing` fields and `{:?}` output never carry the full value.
///
/// Serialization still writes the real value: API responses need it.
#[derive(Clone, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn redacted(&self) -> String {
        let raw = self.0.as_ref();
        let count = raw.chars().count();
        if count <= VISIBLE_TAIL * 2 {
            return "****".to_string();
        }
        let tail: String = raw.chars().skip(count - VISIBLE_TAIL).collect();
        format!("****{}", tail)
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
