//! Construction capabilities: direct construction and named static factories.

use crate::error::ClassResult;
use crate::internal::short_type_name;

/// A type that can be built from a fixed argument list.
///
/// Implementing this trait is the explicit marker that makes a type usable as a
/// class: [`Class<T>`](crate::Class) tokens, resolvers and [`create`](crate::create)
/// all require it. The argument list is a single associated type, usually a tuple.
/// Use `()` for types built without arguments; a bare (unresolved) class is
/// constructed with `Args::default()`.
///
/// # Examples
///
/// ```rust
/// use classable::{Class, Constructible, ClassResult};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl Constructible for User {
///     type Args = (String, u32);
///
///     fn construct((name, age): Self::Args) -> ClassResult<Self> {
///         Ok(User { name, age })
///     }
/// }
///
/// let user = Class::<User>::new().construct(("Ada".to_string(), 36)).unwrap();
/// assert_eq!(user.name, "Ada");
/// assert_eq!(User::class_name(), "User");
/// ```
pub trait Constructible: Sized + 'static {
    /// Constructor argument list.
    type Args: Send + 'static;

    /// Builds an instance from `args`.
    ///
    /// Failures are returned unchanged to whoever triggered construction.
    fn construct(args: Self::Args) -> ClassResult<Self>;

    /// Declared name of the type, without its module path.
    fn class_name() -> &'static str {
        short_type_name::<Self>()
    }
}

/// A type exposing named static factory methods.
///
/// Static factories are invoked by name through a
/// [`StaticFactory`](crate::StaticFactory) descriptor instead of direct
/// construction. Every name a selector may produce must be listed in
/// [`METHODS`](Self::METHODS); names outside the list are rejected with
/// [`ClassError::UnknownStaticMethod`](crate::ClassError::UnknownStaticMethod)
/// before `call_static` runs.
///
/// The return value of a static method is passed through unchanged, so
/// [`Output`](Self::Output) need not be `Self`.
///
/// # Examples
///
/// ```rust
/// use classable::{StaticMethods, ClassError, ClassResult};
///
/// struct Cache {
///     ttl: u64,
/// }
///
/// impl StaticMethods for Cache {
///     type Args = u64;
///     type Output = Cache;
///     const METHODS: &'static [&'static str] = &["create", "unbounded"];
///
///     fn call_static(method: &str, ttl: u64) -> ClassResult<Cache> {
///         match method {
///             "create" => Ok(Cache { ttl }),
///             "unbounded" => Ok(Cache { ttl: u64::MAX }),
///             other => Err(ClassError::unknown_static::<Cache>(other)),
///         }
///     }
/// }
///
/// assert!(Cache::has_static_method("create"));
/// assert!(!Cache::has_static_method("warm"));
/// ```
pub trait StaticMethods: Sized + 'static {
    /// Argument list shared by the static methods.
    type Args: Send + 'static;
    /// Value the static methods return.
    type Output: Send + 'static;
    /// Names of the static methods that may be invoked.
    const METHODS: &'static [&'static str];

    /// Invokes the static method called `method`.
    fn call_static(method: &str, args: Self::Args) -> ClassResult<Self::Output>;

    /// Whether `method` names one of [`METHODS`](Self::METHODS).
    fn has_static_method(method: &str) -> bool {
        Self::METHODS.iter().any(|m| *m == method)
    }
}
