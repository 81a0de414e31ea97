/// Builds a co-owner of a [`LinkedPtr`] that views the pointee as an unsized
/// type, usually a trait object.
///
/// `upcast!(ptr => dyn Trait)` joins `ptr`'s ring, so the new pointer and
/// `ptr` share the pointee and compare equal. Only unsizing coercions are
/// accepted, so whichever member of the ring is dropped last releases the
/// pointee correctly: the trait object's vtable carries the drop glue of the
/// concrete type.
///
/// [`LinkedPtr`]: crate::LinkedPtr
///
/// # Examples
///
/// ```
/// use linkref::{upcast, LinkedPtr};
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
/// }
///
/// let square = LinkedPtr::new(Square(2.0));
/// let shape: LinkedPtr<dyn Shape> = upcast!(square => dyn Shape);
/// assert_eq!(shape.area(), 4.0);
/// assert!(shape == square);
/// assert_eq!(LinkedPtr::owner_count(&shape), 2);
/// ```
///
/// Conversions that are not unsizing coercions do not compile:
///
/// ```compile_fail
/// use linkref::{upcast, LinkedPtr};
///
/// let number = LinkedPtr::new(1_u32);
/// let bytes: LinkedPtr<[u8; 4]> = upcast!(number => [u8; 4]);
/// ```
#[macro_export]
macro_rules! upcast {
    ($ptr:expr => $target:ty) => {{
        let source: &$crate::LinkedPtr<_> = &$ptr;
        // SAFETY: the closure only type checks if `NonNull<T>` coerces to
        // `NonNull<$target>`. That is an unsizing coercion, which keeps the
        // pointee address and reaches the drop glue of the concrete type.
        unsafe { $crate::LinkedPtr::cast(source, |ptr| -> ::core::ptr::NonNull<$target> { ptr }) }
    }};
}
