use core::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

pub type HashSet<T> = hashbrown::HashSet<T, BuildHasherDefault<FxHasher>>;
