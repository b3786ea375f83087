//! Sentinel class for slots that have not been bound to a real type yet.

use crate::class::Class;
use crate::error::{ClassError, ClassResult};
use crate::resolver::{Resolve, Resolver};
use crate::static_factory::{StaticCall, StaticFactory};
use crate::traits::{Constructible, StaticMethods};

/// Marker meaning "not yet configured".
///
/// Needs no construction arguments and exposes one static factory,
/// `get_instance`. It is not a singleton: every construction produces its own
/// value.
///
/// # Examples
///
/// ```rust
/// use classable::{create, from_static, placeholder, placeholder_instance, Classable, Placeholder};
///
/// let slot: Classable<Placeholder> = placeholder().into();
/// assert!(slot.is_placeholder());
///
/// let built = create(&slot, None).unwrap().into_immediate().unwrap();
/// let fetched = from_static(&placeholder_instance::<()>(), None).unwrap().into_immediate().unwrap();
/// assert_eq!(built, fetched);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Placeholder;

impl Placeholder {
    /// Name of the static factory method.
    pub const GET_INSTANCE: &'static str = "get_instance";

    /// Static factory producing a fresh placeholder.
    pub fn get_instance() -> Self {
        Placeholder
    }
}

impl Constructible for Placeholder {
    type Args = ();

    fn construct(_: ()) -> ClassResult<Self> {
        Ok(Placeholder)
    }
}

impl StaticMethods for Placeholder {
    type Args = ();
    type Output = Placeholder;
    const METHODS: &'static [&'static str] = &[Placeholder::GET_INSTANCE];

    fn call_static(method: &str, _: ()) -> ClassResult<Placeholder> {
        match method {
            Placeholder::GET_INSTANCE => Ok(Placeholder::get_instance()),
            other => Err(ClassError::unknown_static::<Placeholder>(other)),
        }
    }
}

/// Resolver over [`Placeholder`] with the empty resolve.
pub fn placeholder<R: 'static>() -> Resolver<Placeholder, R> {
    Resolver::new(Class::new(), Resolve::empty())
}

/// Static-factory descriptor invoking [`Placeholder::get_instance`].
pub fn placeholder_instance<R: 'static>() -> StaticFactory<Placeholder, R> {
    StaticFactory::new(Class::new(), || StaticCall::new(Placeholder::GET_INSTANCE, ()))
}
