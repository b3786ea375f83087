//! Short, human-readable type names for descriptors and diagnostics.

use std::any::type_name;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

/// Returns the declared name of `T` with module paths removed.
///
/// Every path in the name is shortened, so `app::Audited<app::User>` becomes
/// `Audited<User>` and `dyn app::Storage + Send` becomes `dyn Storage + Send`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    if is_plain_path(full) {
        return match full.rfind("::") {
            Some(idx) => &full[idx + 2..],
            None => full,
        };
    }
    intern(full)
}

fn is_plain_path(name: &str) -> bool {
    name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b':')
}

// Compound names are shortened once per type and kept for the life of the process.
fn intern(full: &'static str) -> &'static str {
    static SHORT_NAMES: Lazy<Mutex<HashMap<&'static str, &'static str>>> = Lazy::new(Default::default);

    let mut names = SHORT_NAMES.lock().unwrap_or_else(PoisonError::into_inner);
    *names.entry(full).or_insert_with(|| {
        let short: &'static str = Box::leak(strip_paths(full).into_boxed_str());
        short
    })
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}
