//! The classable sum type and the operations that normalize and construct it.

use std::any::TypeId;
use std::fmt;

use crate::class::Class;
use crate::deferred::MaybeDeferred;
use crate::descriptors::{ClassDescriptor, DescriptorKind};
use crate::error::ClassResult;
use crate::placeholder::Placeholder;
use crate::resolver::{Resolve, Resolver};
use crate::traits::{Classify, Constructible, Shape};

/// Either a bare class or a resolver descriptor for it.
///
/// This is the primary input to [`create`]. A bare class is built with its
/// empty argument list; a resolver computes the arguments first, possibly
/// asynchronously, possibly from the runtime context `R`.
///
/// Conversions exist from [`Class<T>`] (when `T::Args: Default`, which then
/// supplies the empty argument list) and from [`Resolver<T, R>`] (for any
/// argument type). Since `R` is not inferred from its default, annotate the
/// binding when converting a bare class:
/// `let logger: Classable<Logger> = Class::new().into();`.
///
/// # Examples
///
/// ```rust
/// use classable::{create, Class, Classable, ClassResult, Constructible, Resolver};
///
/// #[derive(Debug)]
/// struct Logger {
///     level: u8,
/// }
///
/// impl Constructible for Logger {
///     type Args = (u8,);
///
///     fn construct((level,): Self::Args) -> ClassResult<Self> {
///         Ok(Logger { level })
///     }
/// }
///
/// let bare: Classable<Logger> = Class::new().into();
/// let verbose: Classable<Logger> = Resolver::immediate(Class::new(), || (4,)).into();
///
/// let quiet = create(&bare, None).unwrap().into_immediate().unwrap();
/// let loud = create(&verbose, None).unwrap().into_immediate().unwrap();
/// assert_eq!(quiet.level, 0);
/// assert_eq!(loud.level, 4);
/// ```
pub enum Classable<T: Constructible, R = ()> {
    /// A class constructed with its empty argument list, produced by the
    /// second field
    Bare(Class<T>, fn() -> T::Args),
    /// A class constructed with resolved arguments
    Resolver(Resolver<T, R>),
}

impl<T: Constructible, R> Classable<T, R> {
    /// Bare class whose empty argument list is `T::Args::default()`.
    pub fn bare(class: Class<T>) -> Self
    where
        T::Args: Default,
    {
        Classable::Bare(class, <T::Args as Default>::default)
    }

    /// The underlying class, whatever the shape.
    pub fn target(&self) -> Class<T> {
        match self {
            Classable::Bare(class, _) => *class,
            Classable::Resolver(resolver) => resolver.target(),
        }
    }

    /// Whether this is a bare class.
    pub fn is_bare(&self) -> bool {
        matches!(self, Classable::Bare(..))
    }

    /// Whether this is a resolver descriptor.
    pub fn is_resolver(&self) -> bool {
        matches!(self, Classable::Resolver(_))
    }

    /// The resolver descriptor, if this is one.
    pub fn as_resolver(&self) -> Option<&Resolver<T, R>> {
        match self {
            Classable::Resolver(resolver) => Some(resolver),
            Classable::Bare(..) => None,
        }
    }

    /// Debugging metadata; never constructs anything.
    pub fn descriptor(&self) -> ClassDescriptor {
        match self {
            Classable::Bare(..) => ClassDescriptor::new(DescriptorKind::Bare, T::class_name()),
            Classable::Resolver(resolver) => resolver.descriptor(),
        }
    }

    /// Whether the slot still holds the [`Placeholder`].
    pub fn is_placeholder(&self) -> bool {
        TypeId::of::<T>() == TypeId::of::<Placeholder>()
    }

    /// Whether `other` targets the same type.
    pub fn same_target<U: Constructible, S>(&self, other: &Classable<U, S>) -> bool {
        self.target().same_as(other.target())
    }
}

impl<T: Constructible, R: 'static> Classable<T, R> {
    /// Normalizes to a resolver descriptor.
    ///
    /// A resolver is returned as is (sharing its resolve function); a bare
    /// class is paired with the [empty](Resolve::empty) resolve. Normalizing
    /// twice gives an equal result.
    pub fn to_resolver(&self) -> Resolver<T, R> {
        match self {
            Classable::Bare(class, empty_args) => Resolver::new(*class, Resolve::empty_with(*empty_args)),
            Classable::Resolver(resolver) => resolver.clone(),
        }
    }

    /// Constructs the target exactly once.
    ///
    /// See [`Resolver::create`] for the immediate/deferred contract; a bare
    /// class is always immediate.
    pub fn create(&self, runtime: Option<&R>) -> ClassResult<MaybeDeferred<T>>
    where
        T: Send,
    {
        match self {
            Classable::Resolver(resolver) => resolver.create(runtime),
            Classable::Bare(class, empty_args) => class.create_with(empty_args()),
        }
    }

    /// Resolver with the same target and `resolve` as its resolve function.
    pub fn with_resolve(&self, resolve: Resolve<T::Args, R>) -> Resolver<T, R> {
        Resolver::new(self.target(), resolve)
    }

    /// Applies `transform` to the target, keeping the shape.
    ///
    /// A bare class stays bare; a resolver keeps its resolve function and gets
    /// the transformed target.
    pub fn wrap<U, F>(&self, transform: F) -> Classable<U, R>
    where
        U: Constructible<Args = T::Args>,
        F: FnOnce(Class<T>) -> Class<U>,
    {
        match self {
            Classable::Bare(class, empty_args) => Classable::Bare(class.wrap(transform), *empty_args),
            Classable::Resolver(resolver) => Classable::Resolver(resolver.wrap(transform)),
        }
    }
}

impl<T: Constructible, R> From<Class<T>> for Classable<T, R>
where
    T::Args: Default,
{
    fn from(class: Class<T>) -> Self {
        Classable::bare(class)
    }
}

impl<T: Constructible, R> From<Resolver<T, R>> for Classable<T, R> {
    fn from(resolver: Resolver<T, R>) -> Self {
        Classable::Resolver(resolver)
    }
}

impl<T: Constructible, R> Clone for Classable<T, R> {
    fn clone(&self) -> Self {
        match self {
            Classable::Bare(class, empty_args) => Classable::Bare(*class, *empty_args),
            Classable::Resolver(resolver) => Classable::Resolver(resolver.clone()),
        }
    }
}

impl<T: Constructible, R> PartialEq for Classable<T, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Classable::Bare(..), Classable::Bare(..)) => true,
            (Classable::Resolver(a), Classable::Resolver(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Constructible, R> fmt::Debug for Classable<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classable::Bare(class, _) => f.debug_tuple("Bare").field(class).finish(),
            Classable::Resolver(resolver) => f.debug_tuple("Resolver").field(resolver).finish(),
        }
    }
}

impl<T: Constructible, R> Classify for Classable<T, R> {
    fn shape(&self) -> Shape {
        match self {
            Classable::Bare(class, _) => class.shape(),
            Classable::Resolver(resolver) => resolver.shape(),
        }
    }
}

/// Normalizes a class or resolver to a resolver descriptor.
///
/// Idempotent: `to_resolver(to_resolver(x)) == to_resolver(x)`.
pub fn to_resolver<T, R>(classable: impl Into<Classable<T, R>>) -> Resolver<T, R>
where
    T: Constructible,
    R: 'static,
{
    classable.into().to_resolver()
}

/// Constructs the classable's target, immediately or once its arguments resolve.
///
/// The runtime context is handed to the resolve function when supplied.
/// Construction and resolution failures are returned unchanged: synchronously
/// on the immediate path, through the returned future on the deferred path.
///
/// # Examples
///
/// ```rust
/// use classable::{create, Class, Classable, ClassResult, Constructible, Resolver};
///
/// struct User {
///     name: String,
/// }
///
/// impl Constructible for User {
///     type Args = (String,);
///
///     fn construct((name,): Self::Args) -> ClassResult<Self> {
///         Ok(User { name })
///     }
/// }
///
/// # #[tokio::main]
/// # async fn main() -> ClassResult<()> {
/// let remote: Classable<User> = Resolver::deferred(Class::new(), || async {
///     Ok(("Grace".to_string(),))
/// })
/// .into();
///
/// let pending = create(&remote, None)?;
/// assert!(pending.is_deferred());
/// assert_eq!(pending.await?.name, "Grace");
/// # Ok(())
/// # }
/// ```
pub fn create<T, R>(classable: &Classable<T, R>, runtime: Option<&R>) -> ClassResult<MaybeDeferred<T>>
where
    T: Constructible + Send,
    R: 'static,
{
    classable.create(runtime)
}

/// The underlying class, whatever the shape.
pub fn get_target<T: Constructible, R>(classable: &Classable<T, R>) -> Class<T> {
    classable.target()
}

/// Resolver with the classable's target and a new resolve function.
pub fn with_resolve<T, R>(classable: &Classable<T, R>, resolve: Resolve<T::Args, R>) -> Resolver<T, R>
where
    T: Constructible,
    R: 'static,
{
    classable.with_resolve(resolve)
}

/// Applies `transform` to the classable's target, keeping its shape.
///
/// # Examples
///
/// ```rust
/// use classable::{wrap, Class, Classable, ClassResult, Constructible};
///
/// struct Service;
///
/// impl Constructible for Service {
///     type Args = ();
///
///     fn construct(_: ()) -> ClassResult<Self> {
///         Ok(Service)
///     }
/// }
///
/// struct Traced<T>(T);
///
/// impl<T: Constructible> Constructible for Traced<T> {
///     type Args = T::Args;
///
///     fn construct(args: Self::Args) -> ClassResult<Self> {
///         T::construct(args).map(Traced)
///     }
/// }
///
/// let service: Classable<Service> = Class::new().into();
/// let traced = wrap(&service, |_| Class::<Traced<Service>>::new());
/// assert!(traced.is_bare());
/// ```
pub fn wrap<T, U, R, F>(classable: &Classable<T, R>, transform: F) -> Classable<U, R>
where
    T: Constructible,
    U: Constructible<Args = T::Args>,
    R: 'static,
    F: FnOnce(Class<T>) -> Class<U>,
{
    classable.wrap(transform)
}

/// Debugging metadata for the classable.
pub fn get_descriptor<T: Constructible, R>(classable: &Classable<T, R>) -> ClassDescriptor {
    classable.descriptor()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Constructible for Probe {
        type Args = ();

        fn construct(_: ()) -> ClassResult<Self> {
            Ok(Probe)
        }
    }

    #[test]
    fn test_placeholder_detection() {
        let unset: Classable<Placeholder> = Class::new().into();
        let set: Classable<Probe> = Class::new().into();
        assert!(unset.is_placeholder());
        assert!(!set.is_placeholder());
    }

    #[test]
    fn test_same_target_across_shapes() {
        let bare: Classable<Probe> = Class::new().into();
        let resolved: Classable<Probe> = Resolver::immediate(Class::new(), || ()).into();
        let other: Classable<Placeholder> = Class::new().into();
        assert!(bare.same_target(&resolved));
        assert!(!bare.same_target(&other));
        assert_ne!(bare, resolved);
    }

    #[test]
    fn test_with_resolve_on_bare_class() {
        let bare: Classable<Probe> = Class::new().into();
        let resolver = bare.with_resolve(Resolve::immediate(|| ()));
        assert!(!resolver.resolve_fn().is_empty());
        assert!(bare.is_bare());
    }
}
