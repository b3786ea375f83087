//! Classification predicates.
//!
//! All predicates are total: values of unrecognized shape yield `false`.

use crate::traits::{Classify, Shape};

/// Whether `value` is a concrete, constructible class.
///
/// # Examples
///
/// ```rust
/// use classable::{is_constructible, Class, ClassResult, Constructible, Resolver};
/// use std::any::Any;
///
/// struct Logger;
///
/// impl Constructible for Logger {
///     type Args = ();
///
///     fn construct(_: ()) -> ClassResult<Self> {
///         Ok(Logger)
///     }
/// }
///
/// assert!(is_constructible(&Class::<Logger>::new()));
///
/// let resolver: Resolver<Logger> = Resolver::immediate(Class::new(), || ());
/// assert!(!is_constructible(&resolver));
///
/// let plain = 42u32;
/// assert!(!is_constructible(&plain as &dyn Any));
/// ```
pub fn is_constructible<C: Classify + ?Sized>(value: &C) -> bool {
    value.shape() == Shape::Concrete
}

/// Whether `value` names a type that can never be constructed.
pub fn is_abstract<C: Classify + ?Sized>(value: &C) -> bool {
    value.shape() == Shape::Abstract
}

/// Whether `value` is a resolver descriptor.
pub fn is_resolver<C: Classify + ?Sized>(value: &C) -> bool {
    value.shape() == Shape::Resolver
}

/// Whether `value` is a static-factory descriptor.
pub fn is_static_factory<C: Classify + ?Sized>(value: &C) -> bool {
    value.shape() == Shape::StaticFactory
}
