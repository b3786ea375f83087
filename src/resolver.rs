//! Resolver descriptors: a target class paired with an argument computation.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::class::Class;
use crate::deferred::MaybeDeferred;
use crate::descriptors::{ClassDescriptor, DescriptorKind};
use crate::error::ClassResult;
use crate::traits::{Classify, Constructible, Shape};

type ResolveFn<A, R> = dyn Fn(Option<&R>) -> MaybeDeferred<A> + Send + Sync;

/// A shared function computing a constructor argument list.
///
/// The function receives the caller's runtime context when one is supplied.
/// Cloning shares the underlying function; two `Resolve`s are equal when they
/// share it, or when both are the [`empty`](Resolve::empty) resolve a bare class
/// is normalized with.
///
/// # Examples
///
/// ```rust
/// use classable::{MaybeDeferred, Resolve};
///
/// struct Env {
///     region: String,
/// }
///
/// let fixed: Resolve<(u16,), Env> = Resolve::immediate(|| (8080,));
/// assert!(fixed.call(None).is_immediate());
///
/// let regional: Resolve<(String,), Env> = Resolve::from_fn(|env: Option<&Env>| {
///     let region = env.map(|e| e.region.clone()).unwrap_or_else(|| "local".to_string());
///     MaybeDeferred::immediate((region,))
/// });
/// let env = Env { region: "eu-west-1".to_string() };
/// let (region,) = regional.call(Some(&env)).into_immediate().ok().unwrap();
/// assert_eq!(region, "eu-west-1");
///
/// assert_eq!(fixed.clone(), fixed);
/// assert_eq!(Resolve::<(), Env>::empty(), Resolve::<(), Env>::empty());
/// ```
pub struct Resolve<A, R = ()> {
    func: Arc<ResolveFn<A, R>>,
    empty: bool,
}

impl<A: Send + 'static, R: 'static> Resolve<A, R> {
    /// Resolve that receives the runtime context, if one is supplied.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(Option<&R>) -> MaybeDeferred<A> + Send + Sync + 'static,
    {
        Resolve {
            func: Arc::new(func),
            empty: false,
        }
    }

    /// Resolve that ignores the runtime context and produces arguments immediately.
    pub fn immediate<F>(func: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        Self::from_fn(move |_| MaybeDeferred::Immediate(func()))
    }

    /// Resolve that ignores the runtime context and produces arguments asynchronously.
    pub fn deferred<F, Fut>(func: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClassResult<A>> + Send + 'static,
    {
        Self::from_fn(move |_| MaybeDeferred::deferred(func()))
    }

    /// Resolve producing the empty argument list.
    pub fn empty() -> Self
    where
        A: Default,
    {
        Self::empty_with(A::default)
    }

    /// Resolve producing the empty argument list `empty_args` returns.
    ///
    /// Equal to every other empty resolve, whatever the producer.
    pub fn empty_with(empty_args: fn() -> A) -> Self {
        Resolve {
            empty: true,
            ..Self::from_fn(move |_| MaybeDeferred::Immediate(empty_args()))
        }
    }
}

impl<A, R> Resolve<A, R> {
    /// Computes the argument list.
    pub fn call(&self, runtime: Option<&R>) -> MaybeDeferred<A> {
        (self.func)(runtime)
    }

    /// Whether this is the empty resolve of a normalized bare class.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Whether both share the same underlying function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl<A, R> Clone for Resolve<A, R> {
    fn clone(&self) -> Self {
        Resolve {
            func: Arc::clone(&self.func),
            empty: self.empty,
        }
    }
}

impl<A, R> PartialEq for Resolve<A, R> {
    fn eq(&self, other: &Self) -> bool {
        (self.empty && other.empty) || self.ptr_eq(other)
    }
}

impl<A, R> fmt::Debug for Resolve<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            f.write_str("Resolve(empty)")
        } else {
            f.write_str("Resolve(..)")
        }
    }
}

/// A class paired with the computation of its constructor arguments.
///
/// Construction through a resolver first runs the resolve function, then
/// constructs the target with its result. When the resolve function is
/// deferred, so is the construction.
///
/// # Examples
///
/// ```rust
/// use classable::{Class, ClassResult, Constructible, Resolver};
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
/// let resolver: Resolver<User> = Resolver::immediate(Class::new(), || ("Ada".to_string(), 36));
/// let user = resolver.create(None).unwrap().into_immediate().ok().unwrap();
/// assert_eq!(user.name, "Ada");
/// assert_eq!(user.age, 36);
/// ```
pub struct Resolver<T: Constructible, R = ()> {
    target: Class<T>,
    resolve: Resolve<T::Args, R>,
}

impl<T: Constructible, R: 'static> Resolver<T, R> {
    /// Pairs `target` with `resolve`.
    pub fn new(target: Class<T>, resolve: Resolve<T::Args, R>) -> Self {
        Resolver { target, resolve }
    }

    /// Resolver whose arguments are computed immediately, ignoring the runtime context.
    pub fn immediate<F>(target: Class<T>, func: F) -> Self
    where
        F: Fn() -> T::Args + Send + Sync + 'static,
    {
        Self::new(target, Resolve::immediate(func))
    }

    /// Resolver whose arguments are computed asynchronously, ignoring the runtime context.
    pub fn deferred<F, Fut>(target: Class<T>, func: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClassResult<T::Args>> + Send + 'static,
    {
        Self::new(target, Resolve::deferred(func))
    }

    /// Resolver whose resolve function receives the runtime context.
    pub fn from_fn<F>(target: Class<T>, func: F) -> Self
    where
        F: Fn(Option<&R>) -> MaybeDeferred<T::Args> + Send + Sync + 'static,
    {
        Self::new(target, Resolve::from_fn(func))
    }

    /// Same target, different resolve function.
    pub fn with_resolve(&self, resolve: Resolve<T::Args, R>) -> Self {
        Self::new(self.target, resolve)
    }

    /// Substitutes the target with `transform(target)`, keeping the resolve function.
    pub fn wrap<U, F>(&self, transform: F) -> Resolver<U, R>
    where
        U: Constructible<Args = T::Args>,
        F: FnOnce(Class<T>) -> Class<U>,
    {
        Resolver::new(self.target.wrap(transform), self.resolve.clone())
    }
}

impl<T: Constructible, R> Resolver<T, R> {
    /// The class this resolver constructs.
    pub fn target(&self) -> Class<T> {
        self.target
    }

    /// The resolve function.
    pub fn resolve_fn(&self) -> &Resolve<T::Args, R> {
        &self.resolve
    }

    /// Computes the constructor arguments.
    pub fn resolve(&self, runtime: Option<&R>) -> MaybeDeferred<T::Args> {
        self.resolve.call(runtime)
    }

    /// Resolves the arguments and constructs the target exactly once.
    ///
    /// Immediate arguments construct before returning; a failing constructor
    /// yields `Err` directly. Deferred arguments yield
    /// [`MaybeDeferred::Deferred`], which constructs after the arguments
    /// arrive. A failed argument computation fails that future and nothing
    /// is constructed.
    pub fn create(&self, runtime: Option<&R>) -> ClassResult<MaybeDeferred<T>>
    where
        T: Send,
    {
        tracing::debug!(
            class = T::class_name(),
            kind = "resolver",
            runtime = runtime.is_some(),
            "creating instance"
        );
        self.resolve(runtime).and_then(T::construct)
    }

    /// Debugging metadata.
    pub fn descriptor(&self) -> ClassDescriptor {
        ClassDescriptor::new(DescriptorKind::Resolver, T::class_name())
    }
}

impl<T: Constructible, R> Clone for Resolver<T, R> {
    fn clone(&self) -> Self {
        Resolver {
            target: self.target,
            resolve: self.resolve.clone(),
        }
    }
}

impl<T: Constructible, R> PartialEq for Resolver<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && self.resolve == other.resolve
    }
}

impl<T: Constructible, R> fmt::Debug for Resolver<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("target", &self.target)
            .field("resolve", &self.resolve)
            .finish()
    }
}

impl<T: Constructible, R> Classify for Resolver<T, R> {
    fn shape(&self) -> Shape {
        Shape::Resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static BUILT: AtomicUsize = AtomicUsize::new(0);

    struct Counter(u8);

    impl Constructible for Counter {
        type Args = (u8,);

        fn construct((n,): Self::Args) -> ClassResult<Self> {
            BUILT.fetch_add(1, Ordering::SeqCst);
            Ok(Counter(n))
        }
    }

    #[test]
    fn test_resolve_equality() {
        let a: Resolve<(u8,)> = Resolve::immediate(|| (1,));
        let b: Resolve<(u8,)> = Resolve::immediate(|| (1,));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert!(Resolve::<(u8,)>::empty().is_empty());
        assert!(!a.is_empty());
    }

    #[test]
    fn test_create_constructs_once() {
        let before = BUILT.load(Ordering::SeqCst);
        let resolver: Resolver<Counter> = Resolver::immediate(Class::new(), || (7,));

        let counter = resolver.create(None).unwrap().into_immediate().ok().unwrap();

        assert_eq!(counter.0, 7);
        assert_eq!(BUILT.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_with_resolve_keeps_target_and_original() {
        let original: Resolver<Counter> = Resolver::immediate(Class::new(), || (1,));
        let replaced = original.with_resolve(Resolve::immediate(|| (2,)));

        assert_eq!(replaced.target(), original.target());
        assert_ne!(replaced.resolve_fn(), original.resolve_fn());
        assert!(matches!(original.resolve(None), MaybeDeferred::Immediate((1,))));
        assert!(matches!(replaced.resolve(None), MaybeDeferred::Immediate((2,))));
    }

    #[test]
    fn test_debug_output() {
        let resolver: Resolver<Counter> = Resolver::new(Class::new(), Resolve::empty());
        assert_eq!(
            format!("{:?}", resolver),
            "Resolver { target: Class<Counter>, resolve: Resolve(empty) }"
        );
    }
}
