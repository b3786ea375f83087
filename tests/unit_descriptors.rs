/// Unit tests for ClassDescriptor and DescriptorKind

use classable::{
    get_descriptor, placeholder, Class, ClassDescriptor, ClassResult, Classable, Constructible, DescriptorKind,
    Placeholder, Resolver,
};
use std::sync::atomic::{AtomicUsize, Ordering};

static BUILT: AtomicUsize = AtomicUsize::new(0);

struct User;

impl Constructible for User {
    type Args = ();

    fn construct(_: ()) -> ClassResult<Self> {
        BUILT.fetch_add(1, Ordering::SeqCst);
        Ok(User)
    }
}

#[test]
fn test_descriptor_bare() {
    let user: Classable<User> = Class::new().into();
    let descriptor = get_descriptor(&user);

    assert_eq!(descriptor, ClassDescriptor::new(DescriptorKind::Bare, "User"));
    assert!(!descriptor.is_resolver());
}

#[test]
fn test_descriptor_resolver() {
    let user: Classable<User> = Resolver::immediate(Class::new(), || ()).into();
    let descriptor = get_descriptor(&user);

    assert_eq!(descriptor.kind, DescriptorKind::Resolver);
    assert_eq!(descriptor.name, "User");
    assert!(descriptor.is_resolver());
}

#[test]
fn test_descriptor_has_no_construction_side_effects() {
    let bare: Classable<User> = Class::new().into();
    let resolved: Classable<User> = Resolver::immediate(Class::new(), || ()).into();

    get_descriptor(&bare);
    get_descriptor(&resolved);

    assert_eq!(BUILT.load(Ordering::SeqCst), 0);
}

#[test]
fn test_descriptor_display() {
    let descriptor = ClassDescriptor::new(DescriptorKind::Bare, "Logger");
    assert_eq!(descriptor.to_string(), "bare Logger");
    assert_eq!(DescriptorKind::Resolver.to_string(), "resolver");
    assert_eq!(DescriptorKind::Bare.as_str(), "bare");
}

#[test]
fn test_placeholder_descriptor() {
    let slot: Classable<Placeholder> = placeholder().into();
    assert_eq!(
        get_descriptor(&slot),
        ClassDescriptor::new(DescriptorKind::Resolver, "Placeholder")
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_descriptor_serializes_lowercase_kind() {
    let descriptor = ClassDescriptor::new(DescriptorKind::Resolver, "User");
    let json = serde_json::to_value(descriptor).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "resolver", "name": "User" }));

    let kind: DescriptorKind = serde_json::from_str("\"bare\"").unwrap();
    assert_eq!(kind, DescriptorKind::Bare);
}

#[cfg(feature = "serde")]
#[test]
fn test_shape_serializes_snake_case() {
    let json = serde_json::to_string(&classable::Shape::StaticFactory).unwrap();
    assert_eq!(json, "\"static_factory\"");
}
