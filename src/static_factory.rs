//! Construction through named static factory methods.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::class::Class;
use crate::deferred::MaybeDeferred;
use crate::error::{ClassError, ClassResult};
use crate::internal::short_type_name;
use crate::traits::{Classify, Shape, StaticMethods};

/// A static method name together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCall<A> {
    /// Name of the static method
    pub method: Cow<'static, str>,
    /// Arguments for the call
    pub args: A,
}

impl<A> StaticCall<A> {
    /// Selects `method` with `args`.
    pub fn new(method: impl Into<Cow<'static, str>>, args: A) -> Self {
        StaticCall {
            method: method.into(),
            args,
        }
    }
}

type SelectorFn<A, R> = dyn Fn(Option<&R>) -> MaybeDeferred<StaticCall<A>> + Send + Sync;

/// A class paired with a selector choosing which static method builds it.
///
/// The selector may be deferred; invocation then is too.
///
/// # Examples
///
/// ```rust
/// use classable::{from_static, Class, ClassError, ClassResult, StaticCall, StaticFactory, StaticMethods};
///
/// #[derive(Debug, PartialEq)]
/// struct Cache {
///     ttl: u64,
/// }
///
/// impl StaticMethods for Cache {
///     type Args = u64;
///     type Output = Cache;
///     const METHODS: &'static [&'static str] = &["create"];
///
///     fn call_static(method: &str, ttl: u64) -> ClassResult<Cache> {
///         match method {
///             "create" => Ok(Cache { ttl }),
///             other => Err(ClassError::unknown_static::<Cache>(other)),
///         }
///     }
/// }
///
/// let factory: StaticFactory<Cache> = StaticFactory::new(Class::new(), || StaticCall::new("create", 3600));
/// let cache = from_static(&factory, None).unwrap().into_immediate().unwrap();
/// assert_eq!(cache, Cache { ttl: 3600 });
/// ```
pub struct StaticFactory<T: StaticMethods, R = ()> {
    selector: Arc<SelectorFn<T::Args, R>>,
    _target: PhantomData<fn() -> T>,
}

impl<T: StaticMethods, R: 'static> StaticFactory<T, R> {
    /// Factory whose selector ignores the runtime context.
    pub fn new<F>(target: Class<T>, selector: F) -> Self
    where
        F: Fn() -> StaticCall<T::Args> + Send + Sync + 'static,
    {
        Self::from_fn(target, move |_| MaybeDeferred::Immediate(selector()))
    }

    /// Factory whose selector receives the runtime context and may be deferred.
    pub fn from_fn<F>(_target: Class<T>, selector: F) -> Self
    where
        F: Fn(Option<&R>) -> MaybeDeferred<StaticCall<T::Args>> + Send + Sync + 'static,
    {
        StaticFactory {
            selector: Arc::new(selector),
            _target: PhantomData,
        }
    }
}

impl<T: StaticMethods, R> StaticFactory<T, R> {
    /// The class whose static methods are invoked.
    pub fn target(&self) -> Class<T> {
        Class::new()
    }

    /// Runs the selector.
    pub fn select(&self, runtime: Option<&R>) -> MaybeDeferred<StaticCall<T::Args>> {
        (self.selector)(runtime)
    }

    /// Selects a static method and invokes it, passing its return value through.
    ///
    /// A method name outside [`StaticMethods::METHODS`] fails with
    /// [`ClassError::UnknownStaticMethod`] and nothing is invoked.
    pub fn invoke(&self, runtime: Option<&R>) -> ClassResult<MaybeDeferred<T::Output>> {
        tracing::debug!(
            class = short_type_name::<T>(),
            kind = "static",
            runtime = runtime.is_some(),
            "invoking static factory"
        );
        self.select(runtime).and_then(call_static::<T>)
    }
}

fn call_static<T: StaticMethods>(call: StaticCall<T::Args>) -> ClassResult<T::Output> {
    if !T::has_static_method(&call.method) {
        tracing::debug!(
            class = short_type_name::<T>(),
            method = %call.method,
            "rejected unknown static method"
        );
        return Err(ClassError::unknown_static::<T>(call.method));
    }
    T::call_static(&call.method, call.args)
}

impl<T: StaticMethods, R> Clone for StaticFactory<T, R> {
    fn clone(&self) -> Self {
        StaticFactory {
            selector: Arc::clone(&self.selector),
            _target: PhantomData,
        }
    }
}

impl<T: StaticMethods, R> fmt::Debug for StaticFactory<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticFactory")
            .field("target", &short_type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: StaticMethods, R> Classify for StaticFactory<T, R> {
    fn shape(&self) -> Shape {
        Shape::StaticFactory
    }
}

/// Builds through the descriptor's selected static method.
///
/// The static method's return value is passed through unchanged. Deferred
/// selectors make the result deferred.
pub fn from_static<T: StaticMethods, R>(
    factory: &StaticFactory<T, R>,
    runtime: Option<&R>,
) -> ClassResult<MaybeDeferred<T::Output>> {
    factory.invoke(runtime)
}
