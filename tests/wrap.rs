use classable::{create, get_descriptor, wrap, Class, ClassResult, Classable, Constructible, DescriptorKind, Resolver};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
struct Mailer {
    host: String,
}

impl Constructible for Mailer {
    type Args = (String,);

    fn construct((host,): Self::Args) -> ClassResult<Self> {
        Ok(Mailer { host })
    }
}

/// Counts constructions of the wrapped class.
#[derive(Debug)]
struct Counted<T>(T);

static COUNTED: AtomicUsize = AtomicUsize::new(0);

impl<T: Constructible> Constructible for Counted<T> {
    type Args = T::Args;

    fn construct(args: Self::Args) -> ClassResult<Self> {
        COUNTED.fetch_add(1, Ordering::SeqCst);
        T::construct(args).map(Counted)
    }
}

/// Marks instances built through a wrapped class.
#[derive(Debug)]
struct Tagged<T>(T);

impl<T: Constructible> Constructible for Tagged<T> {
    type Args = T::Args;

    fn construct(args: Self::Args) -> ClassResult<Self> {
        T::construct(args).map(Tagged)
    }
}

#[test]
fn test_wrap_keeps_bare_shape() {
    let mailer: Classable<Mailer> = Class::new().into();

    let wrapped = wrap(&mailer, |_| Class::<Tagged<Mailer>>::new());

    assert!(wrapped.is_bare());
    assert_eq!(get_descriptor(&wrapped).kind, DescriptorKind::Bare);
    let built = create(&wrapped, None).unwrap().into_immediate().unwrap();
    assert_eq!(built.0.host, "");
}

#[test]
fn test_wrap_keeps_resolve_of_descriptor() {
    let resolver: Resolver<Mailer> = Resolver::immediate(Class::new(), || ("smtp.local".to_string(),));
    let mailer: Classable<Mailer> = resolver.clone().into();

    let wrapped = wrap(&mailer, |_| Class::<Tagged<Mailer>>::new());

    let wrapped_resolver = wrapped.as_resolver().unwrap();
    assert!(wrapped_resolver.resolve_fn().ptr_eq(resolver.resolve_fn()));
    assert_eq!(wrapped_resolver.target(), Class::<Tagged<Mailer>>::new());

    let built = create(&wrapped, None).unwrap().into_immediate().unwrap();
    assert_eq!(built.0.host, "smtp.local");
}

#[test]
fn test_wrap_receives_original_target() {
    let mailer: Classable<Mailer> = Class::new().into();
    let mut seen = None;

    let _wrapped = wrap(&mailer, |original| {
        seen = Some(original.name());
        Class::<Tagged<Mailer>>::new()
    });

    assert_eq!(seen, Some("Mailer"));
}

#[test]
fn test_wrap_chains_in_order() {
    let mailer: Classable<Mailer> = Resolver::immediate(Class::new(), || ("mx".to_string(),)).into();

    let inner = wrap(&mailer, |_| Class::<Counted<Mailer>>::new());
    let outer = wrap(&inner, |_| Class::<Tagged<Counted<Mailer>>>::new());

    let before = COUNTED.load(Ordering::SeqCst);
    let built = create(&outer, None).unwrap().into_immediate().unwrap();

    assert_eq!((built.0).0.host, "mx");
    assert_eq!(COUNTED.load(Ordering::SeqCst), before + 1);
    assert!(get_descriptor(&outer).name.starts_with("Tagged<"));
}

#[test]
fn test_wrap_does_not_touch_original() {
    let mailer: Classable<Mailer> = Resolver::immediate(Class::new(), || ("mx".to_string(),)).into();
    let _wrapped = wrap(&mailer, |_| Class::<Tagged<Mailer>>::new());

    assert_eq!(mailer.target(), Class::<Mailer>::new());
    assert_eq!(get_descriptor(&mailer).name, "Mailer");
}
