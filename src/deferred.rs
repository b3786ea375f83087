//! Values that are either available now or produced by a pending computation.

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::future::{self, BoxFuture, Either, FutureExt, Ready};

use crate::error::ClassResult;

/// A value available immediately, or a deferred computation producing it.
///
/// Resolvers return their argument lists as `MaybeDeferred`, and
/// [`create`](crate::create) / [`from_static`](crate::from_static) return
/// instances the same way. The immediate variant never allocates a future;
/// the deferred variant never blocks the caller and must be awaited.
///
/// # Examples
///
/// ```rust
/// use classable::MaybeDeferred;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), classable::ClassError> {
/// let now = MaybeDeferred::immediate(3);
/// assert!(now.is_immediate());
///
/// let later = MaybeDeferred::deferred(async { Ok(4) });
/// assert!(later.is_deferred());
///
/// assert_eq!(now.await? + later.await?, 7);
/// # Ok(())
/// # }
/// ```
pub enum MaybeDeferred<T> {
    /// The value is ready
    Immediate(T),
    /// The value is produced once the future completes
    Deferred(BoxFuture<'static, ClassResult<T>>),
}

impl<T> MaybeDeferred<T> {
    /// Wraps a ready value.
    pub fn immediate(value: T) -> Self {
        MaybeDeferred::Immediate(value)
    }

    /// Whether the value is ready without awaiting.
    pub fn is_immediate(&self) -> bool {
        matches!(self, MaybeDeferred::Immediate(_))
    }

    /// Whether the value must be awaited.
    pub fn is_deferred(&self) -> bool {
        matches!(self, MaybeDeferred::Deferred(_))
    }

    /// Takes the ready value, or gives `self` back when it is deferred.
    pub fn into_immediate(self) -> Result<T, Self> {
        match self {
            MaybeDeferred::Immediate(value) => Ok(value),
            deferred => Err(deferred),
        }
    }
}

impl<T: Send + 'static> MaybeDeferred<T> {
    /// Wraps a pending computation.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = ClassResult<T>> + Send + 'static,
    {
        MaybeDeferred::Deferred(future.boxed())
    }

    /// Feeds the value into `f` now, or once the pending computation completes.
    ///
    /// On the immediate path `f` runs before this returns and its failure is
    /// returned synchronously. On the deferred path `f` runs inside the returned
    /// future, and only if the pending computation succeeded.
    pub fn and_then<U, F>(self, f: F) -> ClassResult<MaybeDeferred<U>>
    where
        U: Send + 'static,
        F: FnOnce(T) -> ClassResult<U> + Send + 'static,
    {
        match self {
            MaybeDeferred::Immediate(value) => f(value).map(MaybeDeferred::Immediate),
            MaybeDeferred::Deferred(pending) => {
                tracing::trace!("value deferred; continuation scheduled");
                Ok(MaybeDeferred::deferred(async move { f(pending.await?) }))
            }
        }
    }
}

impl<T: Send + 'static> IntoFuture for MaybeDeferred<T> {
    type Output = ClassResult<T>;
    type IntoFuture = Either<Ready<ClassResult<T>>, BoxFuture<'static, ClassResult<T>>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            MaybeDeferred::Immediate(value) => Either::Left(future::ready(Ok(value))),
            MaybeDeferred::Deferred(pending) => Either::Right(pending),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MaybeDeferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaybeDeferred::Immediate(value) => f.debug_tuple("Immediate").field(value).finish(),
            MaybeDeferred::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
