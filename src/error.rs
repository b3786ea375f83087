//! Error types for construction and static-factory invocation.

use std::error::Error;

use thiserror::Error;

/// Boxed error produced by caller code (constructors, resolvers, static methods).
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Construction errors
///
/// The library never translates a failure raised by caller code: it travels
/// inside [`ClassError::Failed`] with its `Display` and `source` forwarded
/// unchanged, and can be recovered with [`ClassError::downcast_ref`] or
/// [`ClassError::into_inner`]. The only error the library raises on its own is
/// [`ClassError::UnknownStaticMethod`].
///
/// # Examples
///
/// ```rust
/// use classable::{ClassError, ClassResult};
///
/// #[derive(Debug)]
/// struct PoolExhausted;
///
/// impl std::fmt::Display for PoolExhausted {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "pool exhausted")
///     }
/// }
///
/// impl std::error::Error for PoolExhausted {}
///
/// let err = ClassError::failed(PoolExhausted);
/// assert_eq!(err.to_string(), "pool exhausted");
/// assert!(err.downcast_ref::<PoolExhausted>().is_some());
///
/// let unknown = ClassError::UnknownStaticMethod { class: "Cache", method: "warm".to_string() };
/// assert_eq!(unknown.to_string(), "Cache has no static method `warm`");
///
/// fn build() -> ClassResult<u32> {
///     Err(ClassError::failed(PoolExhausted))
/// }
/// assert!(build().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ClassError {
    /// Failure raised by a constructor, resolver or static method
    #[error(transparent)]
    Failed(BoxError),
    /// Static-factory selection named a method the target does not expose
    #[error("{class} has no static method `{method}`")]
    UnknownStaticMethod {
        /// Short name of the target type
        class: &'static str,
        /// Method name the selector produced
        method: String,
    },
}

impl ClassError {
    /// Wraps a caller error without altering it.
    pub fn failed(err: impl Into<BoxError>) -> Self {
        ClassError::Failed(err.into())
    }

    /// Builds the error for a static method `T` does not expose.
    pub fn unknown_static<T: ?Sized>(method: impl Into<String>) -> Self {
        ClassError::UnknownStaticMethod {
            class: crate::internal::short_type_name::<T>(),
            method: method.into(),
        }
    }

    /// Borrows the caller error as `E`, if this is a [`ClassError::Failed`] holding one.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            ClassError::Failed(inner) => inner.downcast_ref::<E>(),
            ClassError::UnknownStaticMethod { .. } => None,
        }
    }

    /// Returns the caller error, if any.
    pub fn into_inner(self) -> Option<BoxError> {
        match self {
            ClassError::Failed(inner) => Some(inner),
            ClassError::UnknownStaticMethod { .. } => None,
        }
    }

    /// Whether this error was raised by the library rather than caller code.
    pub fn is_library_error(&self) -> bool {
        matches!(self, ClassError::UnknownStaticMethod { .. })
    }
}

/// Result type for construction operations
///
/// A convenience alias for `Result<T, ClassError>` used throughout classable.
pub type ClassResult<T> = Result<T, ClassError>;
