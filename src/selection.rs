//! Choosing one classable and its arguments among candidates.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::classable::Classable;
use crate::deferred::MaybeDeferred;
use crate::descriptors::{ClassDescriptor, DescriptorKind};
use crate::error::{ClassError, ClassResult};
use crate::traits::{Classify, Constructible, Shape};

type CreateFn<O, R> = dyn Fn(Option<&R>) -> ClassResult<MaybeDeferred<O>> + Send + Sync;
type ConstructFn<O> = dyn Fn(Box<dyn Any + Send>) -> ClassResult<O> + Send + Sync;

/// The classable a selector chose, with the arguments to build it with.
pub struct Selected<T: Constructible, R = ()> {
    /// The chosen classable
    pub classable: Classable<T, R>,
    /// Constructor arguments chosen for it
    pub args: T::Args,
}

impl<T: Constructible, R> Selected<T, R> {
    /// Pairs a classable with arguments.
    pub fn new(classable: Classable<T, R>, args: T::Args) -> Self {
        Selected { classable, args }
    }

    /// Constructs the chosen target with the chosen arguments.
    ///
    /// The classable's own resolve function, if any, is not consulted.
    pub fn construct(self) -> ClassResult<T> {
        self.classable.target().construct(self.args)
    }

    /// Splits into the classable and its arguments.
    pub fn into_parts(self) -> (Classable<T, R>, T::Args) {
        (self.classable, self.args)
    }

    /// Hides the target type behind `O`, so that selections over different
    /// targets share one type.
    pub fn erase<O>(self, upcast: fn(T) -> O) -> AnySelected<O, R>
    where
        T: Send,
        O: Send + 'static,
        R: 'static,
    {
        AnySelected {
            classable: self.classable.erase(upcast),
            args: Box::new(self.args),
        }
    }
}

impl<T: Constructible, R> fmt::Debug for Selected<T, R>
where
    T::Args: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selected")
            .field("classable", &self.classable)
            .field("args", &self.args)
            .finish()
    }
}

/// A classable whose target type is hidden behind a common output type `O`.
///
/// Candidates built from different classes, for example a memory and a
/// networked implementation of one storage trait, become the same type once
/// erased and can be offered to a single selector.
///
/// # Examples
///
/// ```rust
/// use classable::{create, AnyClassable, Class, Classable, ClassResult, Constructible};
///
/// trait Storage: Send {
///     fn backend(&self) -> String;
/// }
///
/// struct Memory;
///
/// impl Constructible for Memory {
///     type Args = ();
///
///     fn construct(_: ()) -> ClassResult<Self> {
///         Ok(Memory)
///     }
/// }
///
/// impl Storage for Memory {
///     fn backend(&self) -> String {
///         "memory".to_string()
///     }
/// }
///
/// struct Remote {
///     url: String,
/// }
///
/// impl Constructible for Remote {
///     type Args = (String,);
///
///     fn construct((url,): Self::Args) -> ClassResult<Self> {
///         Ok(Remote { url })
///     }
/// }
///
/// impl Storage for Remote {
///     fn backend(&self) -> String {
///         self.url.clone()
///     }
/// }
///
/// let memory: Classable<Memory> = Class::new().into();
/// let remote: Classable<Remote> = Class::new().into();
/// let candidates: Vec<AnyClassable<Box<dyn Storage>>> = vec![
///     memory.erase(|m| Box::new(m) as Box<dyn Storage>),
///     remote.erase(|r| Box::new(r) as Box<dyn Storage>),
/// ];
///
/// let chosen = candidates[1].with_args((String::from("redis://cache"),)).unwrap();
/// assert_eq!(chosen.construct().unwrap().backend(), "redis://cache");
/// assert!(candidates[0].with_args((String::new(),)).is_none());
/// ```
pub struct AnyClassable<O, R = ()> {
    descriptor: ClassDescriptor,
    args_type: TypeId,
    create: Arc<CreateFn<O, R>>,
    construct: Arc<ConstructFn<O>>,
}

impl<T, R> Classable<T, R>
where
    T: Constructible + Send,
    R: 'static,
{
    /// Hides the target type behind `O`, converting every instance with `upcast`.
    pub fn erase<O: Send + 'static>(self, upcast: fn(T) -> O) -> AnyClassable<O, R> {
        let descriptor = self.descriptor();
        let name = descriptor.name;
        AnyClassable {
            descriptor,
            args_type: TypeId::of::<T::Args>(),
            create: Arc::new(move |runtime: Option<&R>| {
                self.create(runtime)?.and_then(move |instance| Ok(upcast(instance)))
            }),
            construct: Arc::new(move |args: Box<dyn Any + Send>| match args.downcast::<T::Args>() {
                Ok(args) => T::construct(*args).map(upcast),
                Err(_) => Err(ClassError::failed(format!("argument list does not fit {}", name))),
            }),
        }
    }
}

impl<O, R> AnyClassable<O, R> {
    /// Debugging metadata of the erased classable.
    pub fn descriptor(&self) -> ClassDescriptor {
        self.descriptor
    }

    /// Constructs through the erased classable's own resolution, exactly like
    /// [`create`](crate::create) on the original.
    pub fn create(&self, runtime: Option<&R>) -> ClassResult<MaybeDeferred<O>> {
        (self.create)(runtime)
    }

    /// Pairs this candidate with an argument list chosen by a selector.
    ///
    /// Returns `None` when `args` is not the target's argument type.
    pub fn with_args<A: Send + 'static>(&self, args: A) -> Option<AnySelected<O, R>> {
        if TypeId::of::<A>() != self.args_type {
            return None;
        }
        Some(AnySelected {
            classable: self.clone(),
            args: Box::new(args),
        })
    }
}

impl<O, R> Clone for AnyClassable<O, R> {
    fn clone(&self) -> Self {
        AnyClassable {
            descriptor: self.descriptor,
            args_type: self.args_type,
            create: Arc::clone(&self.create),
            construct: Arc::clone(&self.construct),
        }
    }
}

impl<O, R> fmt::Debug for AnyClassable<O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyClassable").field(&self.descriptor).finish()
    }
}

impl<O, R> Classify for AnyClassable<O, R> {
    fn shape(&self) -> Shape {
        match self.descriptor.kind {
            DescriptorKind::Resolver => Shape::Resolver,
            DescriptorKind::Bare => Shape::Concrete,
        }
    }
}

/// A selection among erased candidates: the chosen classable and its arguments.
pub struct AnySelected<O, R = ()> {
    classable: AnyClassable<O, R>,
    args: Box<dyn Any + Send>,
}

impl<O, R> AnySelected<O, R> {
    /// The chosen candidate.
    pub fn classable(&self) -> &AnyClassable<O, R> {
        &self.classable
    }

    /// Constructs the chosen target with the chosen arguments.
    ///
    /// The candidate's own resolve function, if any, is not consulted.
    pub fn construct(self) -> ClassResult<O> {
        (self.classable.construct)(self.args)
    }
}

impl<O, R> fmt::Debug for AnySelected<O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnySelected")
            .field("classable", &self.classable)
            .finish_non_exhaustive()
    }
}

/// Turns a selector function into a callable forwarder.
///
/// The returned closure hands the runtime context and the candidates to
/// `selector` and returns its answer unchanged. All decision logic stays in
/// `selector`.
///
/// Candidates share one type `C`. To choose between different classes,
/// offer [`AnyClassable`] candidates and answer with [`AnySelected`].
///
/// # Examples
///
/// ```rust
/// use classable::{select, Class, Classable, ClassResult, Constructible, MaybeDeferred, Resolver, Selected};
///
/// struct Store {
///     shards: u8,
/// }
///
/// impl Constructible for Store {
///     type Args = (u8,);
///
///     fn construct((shards,): Self::Args) -> ClassResult<Self> {
///         Ok(Store { shards })
///     }
/// }
///
/// struct Load {
///     high: bool,
/// }
///
/// let pick = select(|load: Option<&Load>, candidates: &[Classable<Store, Load>]| {
///     let index = if load.map_or(false, |l| l.high) { 1 } else { 0 };
///     MaybeDeferred::immediate(Selected::new(candidates[index].clone(), (index as u8 + 1,)))
/// });
///
/// let small: Classable<Store, Load> = Class::new().into();
/// let sharded: Classable<Store, Load> = Resolver::immediate(Class::new(), || (8,)).into();
/// let candidates = [small, sharded];
///
/// let chosen = pick(Some(&Load { high: true }), &candidates[..]).into_immediate().ok().unwrap();
/// assert!(chosen.classable.is_resolver());
/// assert_eq!(chosen.construct().unwrap().shards, 2);
/// ```
pub fn select<R, C, S, F>(selector: F) -> impl Fn(Option<&R>, &[C]) -> MaybeDeferred<S>
where
    F: Fn(Option<&R>, &[C]) -> MaybeDeferred<S>,
{
    move |runtime: Option<&R>, candidates: &[C]| selector(runtime, candidates)
}
