//! Identity table: `(label, parent identity)` → stable 64-bit identity and the
//! widget stored under it.
//!
//! Identities are hashed with fixed seeds, so they are the same from run to
//! run and never depend on the order widgets are built in. Each hash bucket
//! keeps a short chain of full keys. When two different `(label, parent)`
//! pairs collide on the 64-bit hash, both keep their own widget; they only
//! share the identity value.
//!
//! Queries that only carry an identity ([`IdentityTable::lookup`]) see the
//! first widget registered under it.
//!
//! The table has a fixed number of slots chosen at construction. Running out
//! is a configuration error.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, Hasher};

use keel_core::UiError;
use smallvec::SmallVec;

use crate::widget::WidgetId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(pub u64);

impl Identity {
    /// Identity of the per-context root widget; parent of every top-level call.
    pub const ROOT: Identity = Identity(0);
}

const SEEDS: [u64; 4] = [
    0x6b65_656c_5f69_6431,
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
];

fn identity_hasher() -> ahash::RandomState {
    ahash::RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3])
}

/// Hashes a `(label, parent)` pair. Same inputs, same identity, in any process.
pub fn hash_identity(label: &str, parent: Identity) -> Identity {
    hash_with(&identity_hasher(), label, parent)
}

fn hash_with(state: &ahash::RandomState, label: &str, parent: Identity) -> Identity {
    let mut h = state.build_hasher();
    label.hash(&mut h);
    parent.hash(&mut h);
    Identity(h.finish())
}

struct Entry {
    label: Box<str>,
    parent: Identity,
    widget: WidgetId,
}

pub struct IdentityTable {
    hasher: ahash::RandomState,
    buckets: HashMap<Identity, SmallVec<[Entry; 1]>, ahash::RandomState>,
    len: usize,
    capacity: usize,
}

impl IdentityTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hasher: identity_hasher(),
            buckets: HashMap::with_capacity_and_hasher(capacity, ahash::RandomState::new()),
            len: 0,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Buckets holding more than one key.
    pub fn collisions(&self) -> usize {
        self.buckets.values().filter(|c| c.len() > 1).count()
    }

    pub fn resolve(&self, label: &str, parent: Identity) -> (Identity, Option<WidgetId>) {
        let identity = hash_with(&self.hasher, label, parent);
        let widget = self.buckets.get(&identity).and_then(|chain| {
            chain
                .iter()
                .find(|e| e.parent == parent && &*e.label == label)
                .map(|e| e.widget)
        });
        (identity, widget)
    }

    /// Registers a freshly allocated widget under `identity`.
    pub fn insert(
        &mut self,
        identity: Identity,
        label: &str,
        parent: Identity,
        widget: WidgetId,
    ) -> Result<(), UiError> {
        if self.len >= self.capacity {
            return Err(UiError::IdentityTableFull {
                capacity: self.capacity,
            });
        }
        let chain = self.buckets.entry(identity).or_default();
        if !chain.is_empty() {
            log::debug!("identity collision on {identity:?} for label {label:?}; chaining");
        }
        chain.push(Entry {
            label: label.into(),
            parent,
            widget,
        });
        self.len += 1;
        Ok(())
    }

    /// First widget registered under `identity`. If two keys collided on
    /// it, the later one is only reachable through [`resolve`](Self::resolve)
    /// with its full `(label, parent)` key.
    pub fn lookup(&self, identity: Identity) -> Option<WidgetId> {
        self.buckets
            .get(&identity)
            .and_then(|chain| chain.first())
            .map(|e| e.widget)
    }
}
