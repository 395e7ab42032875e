//! Object pools for recyclable world objects
//!
//! World objects are never destroyed once allocated: culled objects go back
//! into the pool for their kind and are handed out again on the next spawn.
//! An object lives either in its pool or in the active set, never both; the
//! transfer is a move, so the exclusivity is structural.

use serde::{Deserialize, Serialize};

/// Implemented by anything an [`ObjectPool`] can hold.
pub trait Poolable {
    /// Clear activity flags so a pooled instance is inert until reused.
    fn deactivate(&mut self);
}

/// A recycle bin for deactivated world objects of one kind.
///
/// Unordered; `acquire` returns an arbitrary pooled instance. Both operations
/// are O(1) amortized. An empty pool is not an error; the caller constructs
/// a fresh instance instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPool<T> {
    items: Vec<T>,
}

impl<T> Default for ObjectPool<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Poolable> ObjectPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return one pooled instance, or `None` if the pool is empty.
    pub fn acquire(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Deactivate `obj` and make it eligible for a future `acquire`.
    pub fn release(&mut self, mut obj: T) {
        obj.deactivate();
        self.items.push(obj);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Dummy {
        active: bool,
    }

    impl Poolable for Dummy {
        fn deactivate(&mut self) {
            self.active = false;
        }
    }

    #[test]
    fn test_acquire_empty_is_none() {
        let mut pool: ObjectPool<Dummy> = ObjectPool::new();
        assert!(pool.acquire().is_none());
    }

    #[test]
    fn test_release_deactivates() {
        let mut pool = ObjectPool::new();
        pool.release(Dummy { active: true });
        let got = pool.acquire().unwrap();
        assert!(!got.active);
        assert!(pool.is_empty());
    }

    proptest! {
        /// Any acquire/release sequence keeps the count consistent and never
        /// yields an active object.
        #[test]
        fn prop_pool_bookkeeping(ops in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut pool = ObjectPool::new();
            let mut expected = 0usize;
            for release in ops {
                if release {
                    pool.release(Dummy { active: true });
                    expected += 1;
                } else {
                    match pool.acquire() {
                        Some(obj) => {
                            prop_assert!(!obj.active);
                            expected -= 1;
                        }
                        None => prop_assert_eq!(expected, 0),
                    }
                }
                prop_assert_eq!(pool.len(), expected);
            }
        }
    }
}
