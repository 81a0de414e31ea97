use linkref::LinkedPtr;

struct Texture {
    name: &'static str,
}

impl Drop for Texture {
    fn drop(&mut self) {
        println!("unloading texture {}", self.name);
    }
}

#[test]
fn readme() {
    let grass = LinkedPtr::new(Texture { name: "grass" });
    let mut tiles = vec![LinkedPtr::clone(&grass); 3];
    assert_eq!(LinkedPtr::owner_count(&grass), 4);

    // Repaint the first tile. It leaves the grass ring and owns a new texture.
    LinkedPtr::reset_with(&mut tiles[0], Texture { name: "stone" });
    assert!(LinkedPtr::is_unique(&tiles[0]));
    assert_eq!(LinkedPtr::owner_count(&grass), 3);

    drop(grass);
    // The grass texture is still used by two tiles.
    assert_eq!(tiles[1].name, "grass");

    // this prints:
    //
    // > unloading texture stone
    // > unloading texture grass
    drop(tiles);
}
