#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use linkref::LinkedPtr;

mod drops;

#[test]
fn many_owners() {
    env_logger::Builder::from_env("LINKREF_LOG").init();

    let counter_x = drops::Counter::new();
    let counter_y = drops::Counter::new();
    {
        let mut lp: LinkedPtr<drops::Tracked> = LinkedPtr::empty();
        lp.clone_from(&LinkedPtr::new(counter_x.track("x")));
        let lp1 = lp.clone();
        let lp2 = lp1.clone();
        let lp3 = lp2.clone();
        let lp4 = lp.clone();
        let lp5 = lp1.clone();
        let lp6 = lp1.clone();
        let mut lp7 = lp3.clone();
        let lp8 = lp7.clone();
        let lp9 = lp5.clone();
        LinkedPtr::reset(&mut lp7);
        let lp10 = lp7.clone();
        let lp11 = lp6.clone();
        let lp12 = lp1.clone();
        let mut lp13 = lp2.clone();
        LinkedPtr::reset_with(&mut lp13, counter_y.track("y"));
        let lp14 = lp3.clone();
        let lp15 = lp13.clone();
        let lp16 = lp12.clone();
        let lp17 = lp15.clone();

        assert!(LinkedPtr::is_empty(&lp10));
        assert_eq!(LinkedPtr::validate(&lp7), Ok(2));
        assert_eq!(LinkedPtr::owner_count(&lp), 13);
        assert_eq!(LinkedPtr::owner_count(&lp17), 3);
        assert_eq!(lp16.label, "x");
        assert_eq!(lp17.label, "y");

        let x_owners = [
            &lp, &lp1, &lp2, &lp3, &lp4, &lp5, &lp6, &lp8, &lp9, &lp11, &lp12, &lp14, &lp16,
        ];
        assert!(x_owners.iter().all(|owner| **owner == lp));
        assert_eq!(counter_x.drops(), 0);
        assert_eq!(counter_y.drops(), 0);
    }
    assert_eq!(counter_x.drops(), 1);
    assert_eq!(counter_y.drops(), 1);
}
