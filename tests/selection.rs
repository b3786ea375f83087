use classable::{
    create, is_resolver, select, AnyClassable, AnySelected, Class, ClassResult, Classable, Constructible,
    DescriptorKind, MaybeDeferred, Resolver, Selected,
};

#[derive(Debug, PartialEq)]
struct Transport {
    kind: &'static str,
    retries: u8,
}

impl Constructible for Transport {
    type Args = (&'static str, u8);

    fn construct((kind, retries): Self::Args) -> ClassResult<Self> {
        Ok(Transport { kind, retries })
    }
}

fn candidates() -> Vec<Classable<Transport, Network>> {
    vec![
        Class::new().into(),
        Resolver::immediate(Class::new(), || ("quic", 1)).into(),
    ]
}

struct Network {
    lossy: bool,
}

#[test]
fn test_select_forwards_selector_result_unchanged() {
    let pick_second = select(|_: Option<&Network>, candidates: &[Classable<Transport, Network>]| {
        MaybeDeferred::immediate(Selected::new(candidates[1].clone(), ("tcp", 9)))
    });

    let pool = candidates();
    let chosen = pick_second(None, &pool[..]).into_immediate().ok().unwrap();

    assert_eq!(chosen.classable, pool[1]);
    assert_eq!(chosen.args, ("tcp", 9));
}

#[test]
fn test_select_passes_runtime_context() {
    let by_network = select(|network: Option<&Network>, candidates: &[Classable<Transport, Network>]| {
        let lossy = network.map_or(false, |n| n.lossy);
        let retries = if lossy { 5 } else { 0 };
        MaybeDeferred::immediate(Selected::new(candidates[usize::from(lossy)].clone(), ("tcp", retries)))
    });

    let pool = candidates();
    let lossy = by_network(Some(&Network { lossy: true }), &pool[..]).into_immediate().ok().unwrap();
    let clean = by_network(None, &pool[..]).into_immediate().ok().unwrap();

    assert!(lossy.classable.is_resolver());
    assert_eq!(lossy.args.1, 5);
    assert!(clean.classable.is_bare());
    assert_eq!(clean.args.1, 0);
}

#[test]
fn test_selected_construct_uses_selected_args() {
    let pick = select(|_: Option<&Network>, candidates: &[Classable<Transport, Network>]| {
        MaybeDeferred::immediate(Selected::new(candidates[1].clone(), ("udp", 2)))
    });

    let pool = candidates();
    let selected = pick(None, &pool[..]).into_immediate().ok().unwrap();
    assert_eq!(selected.construct().unwrap(), Transport { kind: "udp", retries: 2 });

    let own = create(&pool[1], None).unwrap().into_immediate().unwrap();
    assert_eq!(own, Transport { kind: "quic", retries: 1 });
}

#[tokio::test]
async fn test_deferred_selection() {
    let pick = select(|_: Option<&Network>, candidates: &[Classable<Transport, Network>]| {
        let chosen = candidates[0].clone();
        MaybeDeferred::deferred(async move {
            tokio::task::yield_now().await;
            Ok(Selected::new(chosen, ("tcp", 3)))
        })
    });

    let pool = candidates();
    let pending = pick(None, &pool[..]);
    assert!(pending.is_deferred());

    let (classable, args) = pending.await.unwrap().into_parts();
    assert!(classable.is_bare());
    assert_eq!(args, ("tcp", 3));
}

trait Storage: Send {
    fn describe(&self) -> String;
}

struct MemoryStorage {
    capacity: usize,
}

impl Constructible for MemoryStorage {
    type Args = (usize,);

    fn construct((capacity,): Self::Args) -> ClassResult<Self> {
        Ok(MemoryStorage { capacity })
    }
}

impl Storage for MemoryStorage {
    fn describe(&self) -> String {
        format!("memory:{}", self.capacity)
    }
}

struct RedisStorage {
    url: String,
}

impl Constructible for RedisStorage {
    type Args = (String,);

    fn construct((url,): Self::Args) -> ClassResult<Self> {
        Ok(RedisStorage { url })
    }
}

impl Storage for RedisStorage {
    fn describe(&self) -> String {
        format!("redis:{}", self.url)
    }
}

struct Deployment {
    clustered: bool,
}

fn storage_candidates() -> Vec<AnyClassable<Box<dyn Storage>, Deployment>> {
    let memory: Classable<MemoryStorage, Deployment> = Class::new().into();
    let redis: Classable<RedisStorage, Deployment> =
        Resolver::immediate(Class::new(), || ("redis://localhost".to_string(),)).into();
    vec![
        memory.erase(|m| Box::new(m) as Box<dyn Storage>),
        redis.erase(|r| Box::new(r) as Box<dyn Storage>),
    ]
}

#[test]
fn test_select_between_different_classes() {
    let pick = select(
        |deployment: Option<&Deployment>, candidates: &[AnyClassable<Box<dyn Storage>, Deployment>]| {
            let chosen = if deployment.map_or(false, |d| d.clustered) {
                candidates[1].with_args(("redis://cluster".to_string(),))
            } else {
                candidates[0].with_args((64usize,))
            };
            MaybeDeferred::immediate(chosen)
        },
    );

    let pool = storage_candidates();

    let clustered = pick(Some(&Deployment { clustered: true }), &pool[..]).into_immediate().ok().unwrap().unwrap();
    assert_eq!(clustered.classable().descriptor().name, "RedisStorage");
    assert_eq!(clustered.construct().unwrap().describe(), "redis:redis://cluster");

    let single = pick(None, &pool[..]).into_immediate().ok().unwrap().unwrap();
    assert_eq!(single.classable().descriptor().kind, DescriptorKind::Bare);
    assert_eq!(single.construct().unwrap().describe(), "memory:64");
}

#[test]
fn test_erased_candidate_rejects_foreign_args() {
    let pool = storage_candidates();
    assert!(pool[0].with_args(("redis://nope".to_string(),)).is_none());
    assert!(pool[1].with_args((8usize,)).is_none());
}

#[test]
fn test_erased_candidate_keeps_its_resolution() {
    let pool = storage_candidates();
    assert!(is_resolver(&pool[1]));
    assert!(!is_resolver(&pool[0]));

    let memory = create_erased(&pool[0]);
    let redis = create_erased(&pool[1]);
    assert_eq!(memory, "memory:0");
    assert_eq!(redis, "redis:redis://localhost");
}

fn create_erased(candidate: &AnyClassable<Box<dyn Storage>, Deployment>) -> String {
    let built = candidate.create(None).unwrap().into_immediate().ok().unwrap();
    built.describe()
}

#[tokio::test]
async fn test_typed_selection_can_be_erased() {
    let pick = select(|_: Option<&Network>, candidates: &[Classable<MemoryStorage, Network>]| {
        let chosen = candidates[0].clone();
        MaybeDeferred::deferred(async move {
            tokio::task::yield_now().await;
            Ok(Selected::new(chosen, (16,)))
        })
    });

    let pool: Vec<Classable<MemoryStorage, Network>> = vec![Class::new().into()];
    let selected = pick(None, &pool[..]).await.unwrap();
    let erased: AnySelected<Box<dyn Storage>, Network> = selected.erase(|m| Box::new(m) as Box<dyn Storage>);

    assert_eq!(erased.classable().descriptor().name, "MemoryStorage");
    assert_eq!(erased.construct().unwrap().describe(), "memory:16");
}
