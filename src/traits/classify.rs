//! Shape classification of classable values.

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

/// The recognized shape of a value.
///
/// Classification is total: anything that is not one of the library's own
/// descriptors or tokens is [`Shape::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Shape {
    /// A concrete, constructible class token
    Concrete,
    /// A type that can be named but never constructed
    Abstract,
    /// A resolver descriptor
    Resolver,
    /// A static-factory descriptor
    StaticFactory,
    /// Anything else
    Unrecognized,
}

/// Values whose shape can be inspected without side effects.
///
/// Implemented for every token and descriptor in this crate and for
/// references, boxes, `Arc`s and `Option`s of them. Type-erased values
/// (`dyn Any`) classify as [`Shape::Unrecognized`], which is how closures and
/// plain data are reported.
///
/// # Examples
///
/// ```rust
/// use classable::{AbstractClass, Class, ClassResult, Classify, Constructible, Shape};
/// use std::any::Any;
///
/// trait Storage {}
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
/// assert_eq!(Class::<Logger>::new().shape(), Shape::Concrete);
/// assert_eq!(AbstractClass::<dyn Storage>::new().shape(), Shape::Abstract);
///
/// let closure = |x: u32| x + 1;
/// assert_eq!((&closure as &dyn Any).shape(), Shape::Unrecognized);
/// ```
pub trait Classify {
    /// Reports the shape of this value.
    fn shape(&self) -> Shape;
}

impl Classify for dyn Any {
    fn shape(&self) -> Shape {
        Shape::Unrecognized
    }
}

impl Classify for dyn Any + Send + Sync {
    fn shape(&self) -> Shape {
        Shape::Unrecognized
    }
}

impl<C: Classify + ?Sized> Classify for &C {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<C: Classify + ?Sized> Classify for Box<C> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<C: Classify + ?Sized> Classify for Arc<C> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<C: Classify + ?Sized> Classify for Rc<C> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<C: Classify> Classify for Option<C> {
    fn shape(&self) -> Shape {
        self.as_ref().map_or(Shape::Unrecognized, Classify::shape)
    }
}
