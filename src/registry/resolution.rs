use crate::core::ValueKind;
use crate::error::Error;

/// Outcome of a typed lookup that keeps "not found" and "wrong type" apart.
///
/// The plain accessors collapse both into the caller's default; this is what
/// [`Registry::resolve_in`](crate::Registry::resolve_in) returns when the
/// difference matters.
#[derive(Debug)]
pub enum Resolution<T> {
    Found(T),
    /// Nothing usable at the path.
    NotFound(Error),
    /// A value exists but can't be converted to the requested type.
    TypeMismatch { found: ValueKind },
}

impl<T> Resolution<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.found().unwrap_or(default)
    }
}
