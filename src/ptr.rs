use alloc::boxed::Box;
use core::borrow::Borrow;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Deref;
use core::ptr::NonNull;

use crate::cycle::{self, Members};
use crate::error::GroupError;
use crate::link::Node;


/// A single-threaded shared-ownership pointer that tracks its co-owners in an
/// intrusive ring.
///
/// Invoking [`clone`] on a `LinkedPtr` produces a new pointer to the same
/// value and splices the new pointer into the ring of pointers that share it.
/// When the last pointer of a ring is dropped the value is dropped too. There
/// is no reference count: a pointer is the last owner when its ring contains
/// nothing but itself.
///
/// A `LinkedPtr` may be empty. Empty pointers can be cloned and they form
/// rings just like non-empty pointers, but own nothing.
///
/// Methods on `LinkedPtr` are associated functions, which means you call them
/// as `LinkedPtr::get(&ptr)` instead of `ptr.get()`. This avoids conflicts
/// with methods of the inner type `T`, which is reachable through [`Deref`].
///
/// `LinkedPtr` is neither `Send` nor `Sync`. Two pointers of one ring may not
/// be used from different threads.
///
/// [`clone`]: Clone::clone
pub struct LinkedPtr<T: ?Sized> {
    pub(crate) node: NonNull<Node>,
    pub(crate) ptr: Option<NonNull<T>>,
    phantom: PhantomData<T>,
}

impl<T> LinkedPtr<T> {
    /// Constructs a new `LinkedPtr<T>` that exclusively owns `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let five = LinkedPtr::new(5);
    /// assert!(LinkedPtr::is_unique(&five));
    /// ```
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Returns the inner value if `this` is its only owner.
    ///
    /// Otherwise, including when `this` is empty, an [`Err`] is returned with
    /// the same `LinkedPtr` that was passed in.
    ///
    /// # Errors
    ///
    /// Returns `this` unchanged if it shares its pointee with another
    /// `LinkedPtr` or owns nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let x = LinkedPtr::new(3);
    /// assert_eq!(LinkedPtr::try_unwrap(x).ok(), Some(3));
    ///
    /// let x = LinkedPtr::new(4);
    /// let _y = LinkedPtr::clone(&x);
    /// assert!(LinkedPtr::try_unwrap(x).is_err());
    /// ```
    pub fn try_unwrap(mut this: Self) -> Result<T, Self> {
        if !Self::is_unique(&this) {
            return Err(this);
        }
        let Some(ptr) = this.ptr.take() else {
            return Err(this);
        };
        drop(this);
        // SAFETY: `this` was the only owner and gave the pointee up above.
        let value = unsafe { Box::from_raw(ptr.as_ptr()) };
        Ok(*value)
    }

    /// Releases the current ownership and takes exclusive ownership of
    /// `value`.
    ///
    /// The previous pointee is dropped if `this` was its last owner. Other
    /// members of the previous ring keep sharing it.
    pub fn reset_with(this: &mut Self, value: T) {
        Self::reset_with_box(this, Box::new(value));
    }
}

impl<T: ?Sized> LinkedPtr<T> {
    /// Constructs an empty `LinkedPtr` that owns nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let empty = LinkedPtr::<str>::empty();
    /// assert!(LinkedPtr::is_empty(&empty));
    /// assert!(!LinkedPtr::is_unique(&empty));
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::with_node(Node::alloc(), None)
    }

    /// Constructs a `LinkedPtr` that exclusively owns the boxed value.
    ///
    /// The box may hold an unsized value such as a trait object.
    #[must_use]
    pub fn from_box(value: Box<T>) -> Self {
        // SAFETY: the box was just released and has no other owner.
        unsafe { Self::from_raw(Box::into_raw(value)) }
    }

    /// Constructs a `LinkedPtr` that takes ownership of a raw pointee.
    ///
    /// A null pointer produces an empty `LinkedPtr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or come from [`Box::into_raw`] (or an allocation
    /// compatible with it) for the same `T`.
    ///
    /// The pointee must not be owned by any other `LinkedPtr` ring. Building
    /// two independent rings from one pointee is undefined behavior: both
    /// rings would release it. Share a pointee by cloning instead.
    #[must_use]
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        Self::with_node(Node::alloc(), NonNull::new(ptr))
    }

    fn with_node(node: NonNull<Node>, ptr: Option<NonNull<T>>) -> Self {
        Self {
            node,
            ptr,
            phantom: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn node(&self) -> &Node {
        // SAFETY: the node is owned by `self` and freed only in `drop`.
        unsafe { self.node.as_ref() }
    }

    /// Build a new member of `this`'s ring that points at `ptr`.
    ///
    /// `ptr` is computed by the caller before any link changes, so a panic
    /// while computing it leaves the ring untouched.
    pub(crate) fn join<U: ?Sized>(this: &Self, ptr: Option<NonNull<U>>) -> LinkedPtr<U> {
        let joined = LinkedPtr::with_node(Node::alloc(), ptr);
        joined.node().insert_after(this.node());
        #[cfg(debug_assertions)]
        cycle::debug_ring(joined.node());
        joined
    }

    /// Returns a reference to the pointee, or `None` if `this` is empty.
    ///
    /// Ownership is not affected.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let x = LinkedPtr::new(7);
    /// assert_eq!(LinkedPtr::get(&x), Some(&7));
    /// assert_eq!(LinkedPtr::get(&LinkedPtr::<i32>::empty()), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(this: &Self) -> Option<&T> {
        // SAFETY: the pointee lives as long as any member of the ring.
        this.ptr.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// Returns the address of the pointee, or `None` if `this` is empty.
    #[inline]
    #[must_use]
    pub fn as_ptr(this: &Self) -> Option<NonNull<T>> {
        this.ptr
    }

    /// Returns a mutable reference to the pointee if `this` is its only
    /// owner.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let mut x = LinkedPtr::new(3);
    /// *LinkedPtr::get_mut(&mut x).unwrap() = 4;
    /// assert_eq!(*x, 4);
    ///
    /// let _y = LinkedPtr::clone(&x);
    /// assert!(LinkedPtr::get_mut(&mut x).is_none());
    /// ```
    #[inline]
    pub fn get_mut(this: &mut Self) -> Option<&mut T> {
        if !Self::is_unique(this) {
            return None;
        }
        // SAFETY: no other pointer shares the pointee and `this` is borrowed
        // mutably.
        this.ptr.map(|ptr| unsafe { &mut *ptr.as_ptr() })
    }

    /// Returns `true` if `this` owns a pointee and is the only member of its
    /// ring.
    ///
    /// An empty pointer is never unique.
    #[inline]
    #[must_use]
    pub fn is_unique(this: &Self) -> bool {
        this.ptr.is_some() && this.node().is_singleton()
    }

    /// Returns `true` if `this` points at a value.
    #[inline]
    #[must_use]
    pub fn is_some(this: &Self) -> bool {
        this.ptr.is_some()
    }

    /// Returns `true` if `this` owns nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(this: &Self) -> bool {
        this.ptr.is_none()
    }

    /// Returns the number of pointers sharing `this`'s pointee, including
    /// `this`.
    ///
    /// This walks the whole ring and runs in time linear in its size. An empty
    /// pointer owns nothing and reports zero, whatever the size of its ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let a = LinkedPtr::new(());
    /// let b = LinkedPtr::clone(&a);
    /// assert_eq!(LinkedPtr::owner_count(&a), 2);
    /// drop(b);
    /// assert_eq!(LinkedPtr::owner_count(&a), 1);
    /// ```
    #[must_use]
    pub fn owner_count(this: &Self) -> usize {
        if this.ptr.is_none() {
            return 0;
        }
        Members::new(this.node()).count()
    }

    /// Walks `this`'s ring, verifies its links and returns the number of
    /// members, counting empty pointers too.
    ///
    /// # Errors
    ///
    /// Returns a [`GroupError`] describing the first malformed link found.
    /// Rings built through this crate's API are always well formed.
    pub fn validate(this: &Self) -> Result<usize, GroupError> {
        cycle::check_ring(this.node())
    }

    /// Returns `true` if the two pointers point at the same address.
    ///
    /// Two empty pointers are equal.
    #[inline]
    #[must_use]
    pub fn ptr_eq<U: ?Sized>(this: &Self, other: &LinkedPtr<U>) -> bool {
        Self::addr(this) == LinkedPtr::addr(other)
    }

    /// The pointee address with any pointer metadata dropped. Empty is zero.
    #[inline]
    #[must_use]
    pub(crate) fn addr(this: &Self) -> usize {
        this.ptr.map_or(0, |ptr| ptr.as_ptr().cast::<()>() as usize)
    }

    /// Exchanges the pointees and the ring positions of `this` and `other`.
    ///
    /// Afterwards `this` is a member of the ring `other` was in and the other
    /// way around. If the two pointers are neighbors in one ring, only the
    /// (identical) pointees are exchanged and the ring is left as it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let mut a = LinkedPtr::new('a');
    /// let mut b = LinkedPtr::new('b');
    /// let c = LinkedPtr::clone(&b);
    /// LinkedPtr::swap(&mut a, &mut b);
    /// assert_eq!(*a, 'b');
    /// assert_eq!(*b, 'a');
    /// assert!(LinkedPtr::ptr_eq(&a, &c));
    /// assert!(LinkedPtr::is_unique(&b));
    /// ```
    pub fn swap(this: &mut Self, other: &mut Self) {
        mem::swap(&mut this.ptr, &mut other.ptr);
        this.node().swap_with(other.node());
        #[cfg(debug_assertions)]
        {
            cycle::debug_ring(this.node());
            cycle::debug_ring(other.node());
        }
    }

    /// Makes `this` a co-owner of `source`'s pointee.
    ///
    /// This is copy-and-swap: a clone of `source` is built first, then
    /// exchanged with `this`. The clone then holds the previous state and is
    /// dropped, releasing the previous pointee if `this` was its last owner.
    /// Assigning from a member of `this`'s own ring leaves it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let mut a = LinkedPtr::new(5);
    /// let b = LinkedPtr::new(6);
    /// LinkedPtr::assign(&mut a, &b);
    /// assert_eq!(*a, 6);
    /// assert!(LinkedPtr::ptr_eq(&a, &b));
    /// ```
    pub fn assign(this: &mut Self, source: &Self) {
        let mut copy = source.clone();
        Self::swap(this, &mut copy);
    }

    /// Releases the current ownership and leaves `this` empty.
    ///
    /// The pointee is dropped if `this` was its last owner. Otherwise `this`
    /// leaves its ring and the remaining members keep sharing the pointee.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let mut a = LinkedPtr::new(1);
    /// let b = LinkedPtr::clone(&a);
    /// LinkedPtr::reset(&mut a);
    /// assert!(LinkedPtr::is_empty(&a));
    /// assert!(LinkedPtr::is_unique(&b));
    /// ```
    pub fn reset(this: &mut Self) {
        let mut empty = Self::empty();
        Self::swap(this, &mut empty);
    }

    /// Releases the current ownership and takes exclusive ownership of the
    /// boxed value.
    pub fn reset_with_box(this: &mut Self, value: Box<T>) {
        let mut fresh = Self::from_box(value);
        Self::swap(this, &mut fresh);
    }

    /// Builds a member of `this`'s ring that views the pointee as a `U`.
    ///
    /// This is the general form of a covariant copy. Prefer the [`upcast!`]
    /// macro, which only accepts unsizing coercions and is safe.
    ///
    /// # Safety
    ///
    /// `f` must return a pointer to the same address that may be released as
    /// a `Box<U>`. Any member of the ring may end up being the last owner and
    /// will release the pointee through its own type, so destroying the
    /// pointee as a `U` must be correct. An unsizing coercion such as
    /// `NonNull<Derived>` to `NonNull<dyn Base>` satisfies this, because the
    /// trait object's vtable carries the dynamic type's drop glue.
    ///
    /// [`upcast!`]: crate::upcast
    #[must_use]
    pub unsafe fn cast<U, F>(this: &Self, f: F) -> LinkedPtr<U>
    where
        U: ?Sized,
        F: FnOnce(NonNull<T>) -> NonNull<U>,
    {
        let ptr = this.ptr.map(f);
        debug_assert_eq!(
            ptr.map_or(0, |ptr| ptr.as_ptr().cast::<()>() as usize),
            Self::addr(this),
            "cast must preserve the pointee address"
        );
        Self::join(this, ptr)
    }
}

impl<T: ?Sized> Clone for LinkedPtr<T> {
    /// Makes a clone of the `LinkedPtr` that shares its pointee.
    ///
    /// The clone is spliced into the ring right after `self`. `self` is not
    /// otherwise affected.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// let five = LinkedPtr::new(5);
    /// let same_five = LinkedPtr::clone(&five);
    /// assert!(LinkedPtr::ptr_eq(&five, &same_five));
    /// assert!(!LinkedPtr::is_unique(&five));
    /// ```
    fn clone(&self) -> Self {
        Self::join(self, self.ptr)
    }

    fn clone_from(&mut self, source: &Self) {
        Self::assign(self, source);
    }
}

impl<T: ?Sized> Default for LinkedPtr<T> {
    /// Creates an empty `LinkedPtr`.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for LinkedPtr<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized> From<Box<T>> for LinkedPtr<T> {
    fn from(value: Box<T>) -> Self {
        Self::from_box(value)
    }
}

impl<T: ?Sized> Deref for LinkedPtr<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the pointer is empty.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match Self::get(self) {
            Some(value) => value,
            None => deref_empty(),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn deref_empty() -> ! {
    panic!("dereferenced an empty LinkedPtr")
}

impl<T: ?Sized> AsRef<T> for LinkedPtr<T> {
    #[track_caller]
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T: ?Sized> Borrow<T> for LinkedPtr<T> {
    #[track_caller]
    fn borrow(&self) -> &T {
        self
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for LinkedPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::get(self) {
            Some(value) => fmt::Debug::fmt(value, f),
            None => f.write_str("Empty"),
        }
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for LinkedPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::get(self) {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("Empty"),
        }
    }
}

impl<T: ?Sized> fmt::Pointer for LinkedPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ptr {
            Some(ptr) => fmt::Pointer::fmt(&ptr, f),
            None => fmt::Pointer::fmt(&core::ptr::null::<()>(), f),
        }
    }
}
