use alloc::boxed::Box;

use crate::link::Node;
use crate::LinkedPtr;

impl<T: ?Sized> Drop for LinkedPtr<T> {
    /// Drops the [`LinkedPtr`].
    ///
    /// If this pointer is the only member of its ring, the pointee (if any) is
    /// dropped and its storage freed. Otherwise the pointer unlinks itself
    /// from the ring and the remaining members keep sharing the pointee.
    ///
    /// A pointer that was converted with [`upcast!`] releases the pointee
    /// through its own type. For trait objects the vtable carries the drop
    /// glue of the original type, so the whole value is destroyed.
    ///
    /// [`upcast!`]: crate::upcast
    ///
    /// # Examples
    ///
    /// ```
    /// use linkref::LinkedPtr;
    ///
    /// struct Foo;
    ///
    /// impl Drop for Foo {
    ///     fn drop(&mut self) {
    ///         println!("dropped!");
    ///     }
    /// }
    ///
    /// let foo  = LinkedPtr::new(Foo);
    /// let foo2 = LinkedPtr::clone(&foo);
    ///
    /// drop(foo);    // Doesn't print anything
    /// drop(foo2);   // Prints "dropped!"
    /// ```
    fn drop(&mut self) {
        if self.node().is_singleton() {
            if let Some(ptr) = self.ptr.take() {
                debug!("linkref releasing pointee {ptr:p}, last owner dropped");
                // SAFETY: this pointer is the last owner and the pointee came
                // from a `Box` of a type whose drop glue matches `T`.
                unsafe {
                    drop(Box::from_raw(ptr.as_ptr()));
                }
            }
        } else {
            let node = self.node;
            trace!("linkref dropping ring member {node:p}, pointee stays alive");
            self.node().detach();
        }
        // SAFETY: the node is a singleton now and nothing else refers to it.
        unsafe {
            Node::dealloc(self.node);
        }
    }
}
