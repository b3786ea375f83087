//! Classable descriptors for introspection and diagnostics.

use std::fmt;

/// How a classable value builds its instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DescriptorKind {
    /// Through a resolver descriptor
    Resolver,
    /// Directly, with an empty argument list
    Bare,
}

impl DescriptorKind {
    /// Lowercase label, as used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptorKind::Resolver => "resolver",
            DescriptorKind::Bare => "bare",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classable descriptor for debugging and logging
///
/// Building a descriptor never constructs anything.
///
/// # Examples
///
/// ```rust
/// use classable::{get_descriptor, Class, Classable, ClassResult, Constructible, DescriptorKind, Resolver};
///
/// struct User;
///
/// impl Constructible for User {
///     type Args = ();
///
///     fn construct(_: ()) -> ClassResult<Self> {
///         Ok(User)
///     }
/// }
///
/// let bare: Classable<User> = Class::new().into();
/// let bare = get_descriptor(&bare);
/// assert_eq!(bare.kind, DescriptorKind::Bare);
/// assert_eq!(bare.name, "User");
///
/// let resolver: Classable<User> = Resolver::immediate(Class::new(), || ()).into();
/// let described = get_descriptor(&resolver);
/// assert_eq!(described.kind, DescriptorKind::Resolver);
/// assert_eq!(described.to_string(), "resolver User");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassDescriptor {
    /// Shape of the classable
    pub kind: DescriptorKind,
    /// Declared name of the target type
    pub name: &'static str,
}

impl ClassDescriptor {
    /// Creates a descriptor.
    pub fn new(kind: DescriptorKind, name: &'static str) -> Self {
        ClassDescriptor { kind, name }
    }

    /// Whether the classable is a resolver descriptor.
    pub fn is_resolver(&self) -> bool {
        self.kind == DescriptorKind::Resolver
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
