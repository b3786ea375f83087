//! Deferred Resolution Demo - building services whose arguments arrive later
//!
//! This example demonstrates:
//! - Bare classes, immediate resolvers and deferred resolvers behind one `create`
//! - A runtime context feeding argument resolution
//! - Wrapping a constructor with a timing layer
//! - Static factories and the placeholder default
//!
//! Run with `RUST_LOG=classable=debug` to see construction events.

use classable::*;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

/// Deployment settings handed to resolvers at construction time
struct Deployment {
    region: &'static str,
    replicas: u8,
}

/// Simulated database pool whose URL is looked up asynchronously
#[derive(Debug)]
struct DatabasePool {
    url: String,
    size: u8,
}

impl Constructible for DatabasePool {
    type Args = (String, u8);

    fn construct((url, size): Self::Args) -> ClassResult<Self> {
        if size == 0 {
            return Err(ClassError::failed("pool size must be positive"));
        }
        Ok(DatabasePool { url, size })
    }
}

/// Request metrics collector built without arguments
#[derive(Debug, Default)]
struct Metrics {
    counters: Vec<(String, u64)>,
}

impl Constructible for Metrics {
    type Args = ();

    fn construct(_: ()) -> ClassResult<Self> {
        Ok(Metrics::default())
    }
}

/// Records how long construction of the inner class took
#[derive(Debug)]
struct Timed<T> {
    inner: T,
    built_in: Duration,
}

impl<T: Constructible> Constructible for Timed<T> {
    type Args = T::Args;

    fn construct(args: Self::Args) -> ClassResult<Self> {
        let start = Instant::now();
        let inner = T::construct(args)?;
        Ok(Timed { inner, built_in: start.elapsed() })
    }
}

/// Rate limiter exposing named static constructors
#[derive(Debug)]
struct RateLimiter {
    per_second: u32,
}

impl StaticMethods for RateLimiter {
    type Args = u32;
    type Output = RateLimiter;
    const METHODS: &'static [&'static str] = &["per_second", "per_minute"];

    fn call_static(method: &str, rate: u32) -> ClassResult<RateLimiter> {
        match method {
            "per_second" => Ok(RateLimiter { per_second: rate }),
            "per_minute" => Ok(RateLimiter { per_second: (rate / 60).max(1) }),
            other => Err(ClassError::unknown_static::<RateLimiter>(other)),
        }
    }
}

async fn lookup_database_url(region: &'static str) -> ClassResult<String> {
    // Simulate a service-discovery round trip
    sleep(Duration::from_millis(50)).await;
    Ok(format!("postgres://db.{}.internal/app", region))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let deployment = Deployment { region: "eu-west-1", replicas: 3 };

    println!("Deferred Resolution Demo\n");

    let metrics: Classable<Metrics, Deployment> = Class::new().into();
    let metrics = create(&metrics, Some(&deployment))?
        .into_immediate()
        .map_err(|_| "bare classes are always immediate")?;
    println!("metrics ready with {} counters", metrics.counters.len());

    let pool: Classable<DatabasePool, Deployment> = Resolver::from_fn(Class::new(), |deployment: Option<&Deployment>| {
        let (region, replicas) = deployment.map_or(("local", 1), |d| (d.region, d.replicas));
        MaybeDeferred::deferred(async move {
            let url = lookup_database_url(region).await?;
            Ok((url, replicas * 4))
        })
    })
    .into();
    println!("descriptor: {}", get_descriptor(&pool));

    let timed_pool = wrap(&pool, |_| Class::<Timed<DatabasePool>>::new());
    let pending = create(&timed_pool, Some(&deployment))?;
    println!("pool construction deferred: {}", pending.is_deferred());

    let timed = pending.await?;
    println!(
        "pool {} (size {}) built in {:?}",
        timed.inner.url, timed.inner.size, timed.built_in
    );

    let broken = with_resolve(&pool, Resolve::immediate(|| ("postgres://nowhere".to_string(), 0)));
    match broken.create(None) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("construction failed as expected: {}", err),
    }

    let limiter: StaticFactory<RateLimiter, Deployment> = StaticFactory::from_fn(Class::new(), |deployment: Option<&Deployment>| {
        let busy = deployment.map_or(false, |d| d.replicas > 1);
        let call = if busy {
            StaticCall::new("per_second", 500)
        } else {
            StaticCall::new("per_minute", 600)
        };
        MaybeDeferred::immediate(call)
    });
    let limiter = from_static(&limiter, Some(&deployment))?.await?;
    println!("rate limiter allows {} req/s", limiter.per_second);

    let unset: Classable<Placeholder> = placeholder().into();
    println!("slot configured: {}", !unset.is_placeholder());

    Ok(())
}
