//! # classable
//!
//! Deferred, parameterized construction of types.
//!
//! A *classable* describes how to build an instance: either a bare class
//! (constructed with its empty argument list) or a resolver that computes the
//! constructor arguments, possibly asynchronously, possibly from a runtime
//! context supplied by the caller. One operation, [`create`], performs the
//! construction. On top of that sit wrapping of constructors, selection among
//! candidates, and construction through named static factory methods.
//!
//! ## Features
//!
//! - **Nominal classes**: a type is a class because it implements [`Constructible`]
//! - **Sync/async bifurcation**: [`MaybeDeferred`] is immediate unless resolution is deferred
//! - **Runtime context**: resolvers and selectors may read a caller-supplied `&R`
//! - **Static factories**: build through named methods with [`from_static`]
//! - **Wrapping and selection**: [`wrap`] swaps constructors, [`select`] picks among candidates
//! - **Placeholder**: a safe default for slots not yet bound to a real type
//!
//! The library is the primitive a dependency-injection container sits on; it
//! stores nothing and retains no runtime context.
//!
//! ## Quick Start
//!
//! ```rust
//! use classable::{create, Class, Classable, ClassResult, Constructible, Resolver};
//!
//! struct Database {
//!     url: String,
//! }
//!
//! impl Constructible for Database {
//!     type Args = (String,);
//!
//!     fn construct((url,): Self::Args) -> ClassResult<Self> {
//!         Ok(Database { url })
//!     }
//! }
//!
//! struct Settings {
//!     database_url: String,
//! }
//!
//! let db: Classable<Database, Settings> = Resolver::from_fn(Class::new(), |settings: Option<&Settings>| {
//!     let url = settings.map_or_else(|| "sqlite::memory:".to_string(), |s| s.database_url.clone());
//!     classable::MaybeDeferred::immediate((url,))
//! })
//! .into();
//!
//! let settings = Settings { database_url: "postgres://localhost".to_string() };
//! let database = create(&db, Some(&settings)).unwrap().into_immediate().ok().unwrap();
//! assert_eq!(database.url, "postgres://localhost");
//! ```
//!
//! ## Deferred Resolution
//!
//! ```rust
//! use classable::{create, Class, Classable, ClassResult, Constructible, Resolver};
//!
//! struct User {
//!     name: String,
//! }
//!
//! impl Constructible for User {
//!     type Args = (String,);
//!
//!     fn construct((name,): Self::Args) -> ClassResult<Self> {
//!         Ok(User { name })
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> ClassResult<()> {
//! let user: Classable<User> = Resolver::deferred(Class::new(), || async {
//!     Ok(("Ada".to_string(),))
//! })
//! .into();
//!
//! let user = create(&user, None)?.await?;
//! assert_eq!(user.name, "Ada");
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod class;
mod classable;
pub mod classify;
pub mod deferred;
pub mod descriptors;
pub mod error;
pub mod placeholder;
pub mod resolver;
pub mod selection;
pub mod static_factory;
pub mod traits;

// Internal modules
mod internal;

// Re-export core types
pub use class::{AbstractClass, Class};
pub use classable::{create, get_descriptor, get_target, to_resolver, with_resolve, wrap, Classable};
pub use classify::{is_abstract, is_constructible, is_resolver, is_static_factory};
pub use deferred::MaybeDeferred;
pub use descriptors::{ClassDescriptor, DescriptorKind};
pub use error::{BoxError, ClassError, ClassResult};
pub use placeholder::{placeholder, placeholder_instance, Placeholder};
pub use resolver::{Resolve, Resolver};
pub use selection::{select, AnyClassable, AnySelected, Selected};
pub use static_factory::{from_static, StaticCall, StaticFactory};
pub use traits::{Classify, Constructible, Shape, StaticMethods};
