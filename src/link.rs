use alloc::boxed::Box;
use core::cell::Cell;
use core::fmt;
use core::ptr::{self, NonNull};


/// A member of an ownership ring.
///
/// Every [`LinkedPtr`] owns exactly one `Node`. All nodes whose pointers share
/// a pointee are linked into one circular doubly-linked list. A node carries no
/// data besides its two sibling links.
///
/// The links obey three invariants between operations:
///
/// - Following `right` from any node visits every member of the ring exactly
///   once before returning to the start. `left` visits them in reverse.
/// - A node is alone in its ring if and only if both links are `None`. A ring
///   never contains a self-loop.
/// - If `a.right` is `b` then `b.left` is `a`.
///
/// The links live in [`Cell`]s so a node can repair the back-references of its
/// neighbors through shared references. Every linked node is heap allocated
/// and detaches itself before it is freed, which keeps the raw neighbor
/// pointers dereferenceable.
///
/// [`LinkedPtr`]: crate::LinkedPtr
pub(crate) struct Node {
    left: Cell<Option<NonNull<Node>>>,
    right: Cell<Option<NonNull<Node>>>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("ptr", &(self as *const Self))
            .field("left", &self.left.get())
            .field("right", &self.right.get())
            .finish()
    }
}

impl Node {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: Cell::new(None),
            right: Cell::new(None),
        }
    }

    /// Allocate a singleton node with a stable address.
    #[inline]
    #[must_use]
    pub fn alloc() -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self::new())))
    }

    /// Free a node returned by [`Node::alloc`].
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must not be freed already and
    /// must be a singleton, so no other node still points at it.
    #[inline]
    pub unsafe fn dealloc(node: NonNull<Self>) {
        debug_assert!(node.as_ref().is_singleton());
        drop(Box::from_raw(node.as_ptr()));
    }

    #[inline]
    #[must_use]
    pub fn left(&self) -> Option<NonNull<Self>> {
        self.left.get()
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> Option<NonNull<Self>> {
        self.right.get()
    }

    /// Overwrite both links without repairing any neighbor.
    #[cfg(test)]
    pub fn set_links(&self, left: Option<NonNull<Self>>, right: Option<NonNull<Self>>) {
        self.left.set(left);
        self.right.set(right);
    }

    /// Whether this node is the only member of its ring.
    ///
    /// This is the only "last owner" test there is. There is no counter.
    #[inline]
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.left.get().is_none() && self.right.get().is_none()
    }

    /// Whether `other` is the left or right neighbor of this node.
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        let other = Some(NonNull::from(other));
        self.left.get() == other || self.right.get() == other
    }

    /// Splice this node into `anchor`'s ring as `anchor`'s right neighbor.
    ///
    /// The node takes over `anchor`'s previous right neighbor as its own right
    /// neighbor. If `anchor` was a singleton the two nodes form a 2-cycle.
    ///
    /// The node must be a fresh singleton distinct from `anchor`.
    pub fn insert_after(&self, anchor: &Self) {
        debug_assert!(self.is_singleton(), "only a singleton node may join a ring");
        debug_assert!(!ptr::eq(self, anchor), "a node cannot join itself");

        let this = NonNull::from(self);
        let anchor_ptr = NonNull::from(anchor);
        match anchor.right.get() {
            None => {
                anchor.left.set(Some(this));
                anchor.right.set(Some(this));
                self.left.set(Some(anchor_ptr));
                self.right.set(Some(anchor_ptr));
            }
            Some(right) => {
                self.left.set(Some(anchor_ptr));
                self.right.set(Some(right));
                // SAFETY: ring members are live until they detach themselves.
                unsafe { right.as_ref() }.left.set(Some(this));
                anchor.right.set(Some(this));
            }
        }
        trace!("linkref spliced node {this:p} after {anchor_ptr:p}");
    }

    /// Unlink this node from its ring, leaving it as a singleton.
    ///
    /// The former neighbors are connected to each other. A survivor of a
    /// 2-cycle becomes a singleton. Detaching a singleton is a no-op.
    pub fn detach(&self) {
        debug_assert_eq!(
            self.left.get().is_none(),
            self.right.get().is_none(),
            "node is half linked"
        );
        let (Some(left), Some(right)) = (self.left.take(), self.right.take()) else {
            return;
        };
        if left == right {
            // SAFETY: ring members are live until they detach themselves.
            let survivor = unsafe { left.as_ref() };
            survivor.left.set(None);
            survivor.right.set(None);
        } else {
            // SAFETY: ring members are live until they detach themselves.
            unsafe {
                left.as_ref().right.set(Some(right));
                right.as_ref().left.set(Some(left));
            }
        }
        trace!("linkref detached node {:p}", ptr::from_ref(self));
    }

    /// Exchange the ring positions of this node and `other`.
    ///
    /// Afterwards each node sits where the other one was, between the other's
    /// former neighbors. Swapping a node with itself, or with one of its own
    /// neighbors, leaves the topology untouched: neighbors belong to the same
    /// ring, so exchanging them cannot change any group membership.
    pub fn swap_with(&self, other: &Self) {
        if ptr::eq(self, other) || self.is_adjacent(other) {
            trace!("linkref swap of {:p} kept topology", ptr::from_ref(self));
            return;
        }

        let this = NonNull::from(self);
        let that = NonNull::from(other);
        let (self_left, self_right) = (self.left.get(), self.right.get());
        let (other_left, other_right) = (other.left.get(), other.right.get());

        self.left.set(other_left);
        self.right.set(other_right);
        other.left.set(self_left);
        other.right.set(self_right);

        // None of the former neighbors is `self` or `other` since the nodes
        // are not adjacent. When they are two apart in one ring, the node in
        // between gets its `left` and `right` rewritten by separate arms.
        //
        // SAFETY: ring members are live until they detach themselves.
        unsafe {
            if let Some(left) = other_left {
                left.as_ref().right.set(Some(this));
            }
            if let Some(right) = other_right {
                right.as_ref().left.set(Some(this));
            }
            if let Some(left) = self_left {
                left.as_ref().right.set(Some(that));
            }
            if let Some(right) = self_right {
                right.as_ref().left.set(Some(that));
            }
        }
        trace!("linkref swapped ring positions of {this:p} and {that:p}");
    }
}
