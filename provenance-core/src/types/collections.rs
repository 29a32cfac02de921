//! Hash collection aliases used across the workspace.

use rustc_hash::{FxHashMap as Map, FxHashSet as Set};

pub type FxHashMap<K, V> = Map<K, V>;
pub type FxHashSet<T> = Set<T>;
