//! `linkref` can share values behind trait objects and move ownership
//! between pointers without ever maintaining a reference count.
//!
//! # A scene of shared shapes
//!
//! The following builds a scene where several layers share the same shape
//! objects. Shapes are created with their concrete type, then viewed as
//! `dyn Shape` with [`upcast!`]. Every layer that holds a shape joins the
//! shape's ownership ring, and a shape is destroyed when the last layer that
//! refers to it goes away.
//!
//! [`upcast!`]: crate::upcast
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use linkref::{upcast, LinkedPtr};
//!
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! struct Circle {
//!     radius: f64,
//!     destroyed: Rc<Cell<bool>>,
//! }
//!
//! impl Shape for Circle {
//!     fn area(&self) -> f64 {
//!         std::f64::consts::PI * self.radius * self.radius
//!     }
//! }
//!
//! impl Drop for Circle {
//!     fn drop(&mut self) {
//!         self.destroyed.set(true);
//!     }
//! }
//!
//! struct Rect {
//!     width: f64,
//!     height: f64,
//! }
//!
//! impl Shape for Rect {
//!     fn area(&self) -> f64 {
//!         self.width * self.height
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Layer {
//!     shapes: Vec<LinkedPtr<dyn Shape>>,
//! }
//!
//! impl Layer {
//!     fn area(&self) -> f64 {
//!         self.shapes.iter().map(|shape| shape.area()).sum()
//!     }
//! }
//!
//! let destroyed = Rc::new(Cell::new(false));
//! let circle = LinkedPtr::new(Circle {
//!     radius: 1.0,
//!     destroyed: Rc::clone(&destroyed),
//! });
//! let rect = LinkedPtr::new(Rect {
//!     width: 2.0,
//!     height: 3.0,
//! });
//!
//! let mut background = Layer::default();
//! let mut foreground = Layer::default();
//! background.shapes.push(upcast!(rect => dyn Shape));
//! background.shapes.push(upcast!(circle => dyn Shape));
//! foreground.shapes.push(upcast!(circle => dyn Shape));
//!
//! // `circle` and its two trait object views form one ring.
//! assert_eq!(LinkedPtr::owner_count(&circle), 3);
//! drop(circle);
//! drop(rect);
//!
//! assert!(background.area() > foreground.area());
//!
//! drop(background);
//! assert!(!destroyed.get());
//! drop(foreground);
//! assert!(destroyed.get());
//! ```
//!
//! # Handing over ownership
//!
//! [`LinkedPtr::swap`] exchanges what two pointers own and which rings they
//! belong to. Combined with [`LinkedPtr::reset`] it moves a value from one
//! slot to another while every other co-owner keeps seeing the same value.
//!
//! ```rust
//! use linkref::LinkedPtr;
//!
//! let mut active = LinkedPtr::new(String::from("draft"));
//! let mut archived = LinkedPtr::<String>::empty();
//! let reader = LinkedPtr::clone(&active);
//!
//! LinkedPtr::swap(&mut active, &mut archived);
//! assert!(LinkedPtr::is_empty(&active));
//! assert_eq!(*archived, "draft");
//! assert!(archived == reader);
//!
//! LinkedPtr::reset_with(&mut active, String::from("final"));
//! assert!(LinkedPtr::is_unique(&active));
//!
//! // The reader keeps the archived value alive after the archive lets go.
//! LinkedPtr::reset(&mut archived);
//! assert_eq!(*reader, "draft");
//! assert!(LinkedPtr::is_unique(&reader));
//! ```
