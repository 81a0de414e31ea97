//! Comparisons between pointers look at pointee addresses only. Two pointers
//! are equal when they point at the same object, not when the objects compare
//! equal. Empty pointers compare equal to each other and order before any
//! non-empty pointer.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::LinkedPtr;

impl<T: ?Sized, U: ?Sized> PartialEq<LinkedPtr<U>> for LinkedPtr<T> {
    #[inline]
    fn eq(&self, other: &LinkedPtr<U>) -> bool {
        LinkedPtr::addr(self) == LinkedPtr::addr(other)
    }
}

impl<T: ?Sized> Eq for LinkedPtr<T> {}

impl<T: ?Sized, U: ?Sized> PartialOrd<LinkedPtr<U>> for LinkedPtr<T> {
    #[inline]
    fn partial_cmp(&self, other: &LinkedPtr<U>) -> Option<Ordering> {
        Some(LinkedPtr::addr(self).cmp(&LinkedPtr::addr(other)))
    }
}

impl<T: ?Sized> Ord for LinkedPtr<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        LinkedPtr::addr(self).cmp(&LinkedPtr::addr(other))
    }
}

impl<T: ?Sized> Hash for LinkedPtr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        LinkedPtr::addr(self).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use core::fmt::Debug;

    use crate::LinkedPtr;

    #[test]
    fn equal_when_sharing_a_pointee() {
        let a = LinkedPtr::new(1);
        let b = a.clone();
        let c = LinkedPtr::new(1);
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn empty_pointers_are_equal_and_smallest() {
        let a = LinkedPtr::<u8>::empty();
        let b = LinkedPtr::<u8>::empty();
        let c = LinkedPtr::new(0_u8);
        assert!(a == b);
        assert!(a <= b);
        assert!(a >= b);
        assert!(a < c);
        assert!(c > a);
    }

    #[test]
    fn ordering_follows_addresses() {
        let a = LinkedPtr::new(10_u64);
        let b = LinkedPtr::new(10_u64);
        let (low, high) = if LinkedPtr::addr(&a) < LinkedPtr::addr(&b) {
            (&a, &b)
        } else {
            (&b, &a)
        };
        assert!(low < high);
        assert!(low <= high);
        assert!(high > low);
        assert!(high >= low);
        assert_eq!(low.cmp(high), core::cmp::Ordering::Less);
    }

    #[test]
    fn compares_across_pointee_types() {
        let concrete = LinkedPtr::new(5_i32);
        let erased: LinkedPtr<dyn Debug> = crate::upcast!(concrete => dyn Debug);
        let other: LinkedPtr<dyn Debug> = LinkedPtr::from_box(Box::new(5_i32) as Box<dyn Debug>);
        assert!(concrete == erased);
        assert!(erased == concrete);
        assert!(concrete != other);
        assert!(concrete <= erased);
        assert!(concrete >= erased);
    }

    #[test]
    fn hash_agrees_with_eq() {
        use crate::hash::HashSet;

        let a = LinkedPtr::new("a");
        let b = LinkedPtr::new("a");
        let mut set = HashSet::default();
        assert!(set.insert(a.clone()));
        assert!(!set.insert(a.clone()));
        assert!(set.insert(b));
        assert_eq!(set.len(), 2);
    }
}
