#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use linkref::{upcast, LinkedPtr};

mod drops;

trait Base {
    fn is_base(&self) -> bool {
        true
    }
}

struct Plain;

impl Base for Plain {}

struct Derived(drops::Tracked);

impl Base for Derived {
    fn is_base(&self) -> bool {
        false
    }
}

#[test]
fn upcast() {
    env_logger::Builder::from_env("LINKREF_LOG").init();

    let counter = drops::Counter::new();

    let mut lptr: LinkedPtr<dyn Base> = LinkedPtr::from_box(Box::new(Plain) as Box<dyn Base>);
    assert!(lptr.is_base());
    lptr = LinkedPtr::from_box(Box::new(Derived(counter.track("derived"))) as Box<dyn Base>);
    assert!(!lptr.is_base());
    drop(lptr);
    assert_eq!(counter.drops(), 1);

    let derived = LinkedPtr::new(Derived(counter.track("shared")));
    assert_eq!(derived.0.label, "shared");
    let base: LinkedPtr<dyn Base> = upcast!(derived => dyn Base);
    assert!(base == derived);
    assert!(!base.is_base());
    assert_eq!(LinkedPtr::owner_count(&derived), 2);

    // The base pointer outlives the derived one and releases the value.
    drop(derived);
    assert_eq!(counter.drops(), 1);
    assert!(LinkedPtr::is_unique(&base));
    drop(base);
    assert_eq!(counter.drops(), 2);
}
