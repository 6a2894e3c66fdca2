use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion ordered map with fast hashing
/// Entries are addressed by index so search nodes can point at their parents cheaply
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
