//! Value-level tokens standing for types.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::deferred::MaybeDeferred;
use crate::error::ClassResult;
use crate::internal::short_type_name;
use crate::traits::{Classify, Constructible, Shape};

/// A constructor for `T`, passed around as a value.
///
/// `Class<T>` is zero-sized and `Copy`. Two tokens are the same constructor
/// exactly when they denote the same type, so equality is always `true` for a
/// given `T` and cross-type comparison goes through [`Class::type_id`].
///
/// # Examples
///
/// ```rust
/// use classable::{Class, Constructible, ClassResult};
///
/// #[derive(Debug, PartialEq)]
/// struct Logger {
///     prefix: String,
/// }
///
/// impl Constructible for Logger {
///     type Args = (String,);
///
///     fn construct((prefix,): Self::Args) -> ClassResult<Self> {
///         Ok(Logger { prefix })
///     }
/// }
///
/// let class = Class::<Logger>::new();
/// assert_eq!(class.name(), "Logger");
///
/// let bare = class.create().unwrap().into_immediate().ok().unwrap();
/// assert_eq!(bare.prefix, "");
///
/// let logger = class.construct(("app".to_string(),)).unwrap();
/// assert_eq!(logger.prefix, "app");
/// ```
pub struct Class<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Class<T> {
    /// Token for `T`.
    pub const fn new() -> Self {
        Class { _marker: PhantomData }
    }
}

impl<T: 'static> Class<T> {
    /// `TypeId` of the denoted type.
    pub fn type_id(self) -> TypeId {
        TypeId::of::<T>()
    }

    /// Whether `other` denotes the same type.
    pub fn same_as<U: 'static>(self, other: Class<U>) -> bool {
        self.type_id() == other.type_id()
    }
}

impl<T: Constructible> Class<T> {
    /// Declared name of the denoted type.
    pub fn name(self) -> &'static str {
        T::class_name()
    }

    /// Constructs `T` with `args`.
    pub fn construct(self, args: T::Args) -> ClassResult<T> {
        T::construct(args)
    }

    /// Constructs `T` with an empty argument list.
    ///
    /// Always immediate; the result is a [`MaybeDeferred`] only so that bare
    /// classes and resolvers share one return type.
    pub fn create(self) -> ClassResult<MaybeDeferred<T>>
    where
        T::Args: Default,
    {
        self.create_with(T::Args::default())
    }

    pub(crate) fn create_with(self, empty_args: T::Args) -> ClassResult<MaybeDeferred<T>> {
        tracing::debug!(class = T::class_name(), kind = "bare", "creating instance");
        T::construct(empty_args).map(MaybeDeferred::Immediate)
    }

    /// Replaces this constructor with the one `transform` returns.
    ///
    /// The replacement must accept the same argument list so that it can stand
    /// wherever `T` was used.
    pub fn wrap<U, F>(self, transform: F) -> Class<U>
    where
        U: Constructible<Args = T::Args>,
        F: FnOnce(Class<T>) -> Class<U>,
    {
        transform(self)
    }
}

impl<T> Clone for Class<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Class<T> {}

impl<T> Default for Class<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Class<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Class<T> {}

impl<T: 'static> Hash for Class<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<T>().hash(state);
    }
}

impl<T> fmt::Debug for Class<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class<{}>", short_type_name::<T>())
    }
}

impl<T: Constructible> Classify for Class<T> {
    fn shape(&self) -> Shape {
        Shape::Concrete
    }
}

/// A type that can be named and extended but never constructed.
///
/// Typically a trait object such as `AbstractClass<dyn Storage>`. It never
/// classifies as constructible, and there is no way to build an instance
/// from it.
///
/// # Examples
///
/// ```rust
/// use classable::{is_abstract, is_constructible, AbstractClass};
///
/// trait Storage {
///     fn get(&self, key: &str) -> Option<String>;
/// }
///
/// let storage = AbstractClass::<dyn Storage>::new();
/// assert!(is_abstract(&storage));
/// assert!(!is_constructible(&storage));
/// ```
pub struct AbstractClass<T: ?Sized> {
    _marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> AbstractClass<T> {
    /// Token for `T`.
    pub const fn new() -> Self {
        AbstractClass { _marker: PhantomData }
    }

    /// Declared name of the denoted type.
    pub fn name(self) -> &'static str {
        short_type_name::<T>()
    }
}

impl<T: ?Sized + 'static> AbstractClass<T> {
    /// `TypeId` of the denoted type.
    pub fn type_id(self) -> TypeId {
        TypeId::of::<T>()
    }
}

impl<T: ?Sized> Clone for AbstractClass<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for AbstractClass<T> {}

impl<T: ?Sized> Default for AbstractClass<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for AbstractClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbstractClass<{}>", short_type_name::<T>())
    }
}

impl<T: ?Sized> Classify for AbstractClass<T> {
    fn shape(&self) -> Shape {
        Shape::Abstract
    }
}
