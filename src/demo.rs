//! A guided tour of the set contract, mirroring the smoke-test a consumer
//! would write by hand: add, duplicate add, contains, remove, growth past the
//! default capacity, clone, move, equality, and indexed access.

use crate::unorderedset::UnorderedSet;

pub fn run() -> anyhow::Result<()> {
    println!("{} {} demo", crate::NAME, crate::VERSION);
    println!();

    let mut set = UnorderedSet::new();
    println!("fresh set: {set:?}");

    set.add("Some data".to_string());
    set.add("2".to_string());
    set.add("3".to_string());
    println!("after three adds: {set:?}");

    set.remove(&"3".to_string());
    println!("after removing \"3\": {set:?}");

    for i in 4..=14 {
        set.add(i.to_string());
    }
    println!("after filling past the default capacity: {set:?}");
    println!();

    println!(
        "contains \"Some data\": {}",
        set.contains(&"Some data".to_string())
    );
    println!(
        "contains \"some data\": {}",
        set.contains(&"some data".to_string())
    );
    println!(
        "remove \"Some data\": {}",
        if set.remove(&"Some data".to_string()) {
            "contained"
        } else {
            "did not contain"
        }
    );
    println!(
        "remove \"some data\": {}",
        if set.remove(&"some data".to_string()) {
            "contained"
        } else {
            "did not contain"
        }
    );
    println!();

    let copy = set.clone();
    println!("copy == original: {}", copy == set);

    let moved = set.take();
    println!("source after move: {set:?}");
    println!("moved == copy: {}", moved == copy);
    println!();

    println!("element at index 3: {}", moved.at(3)?);
    println!("element via []: {}", moved[0]);
    match moved.at(100) {
        Ok(element) => println!("element at index 100: {element}"),
        Err(err) => println!("element at index 100: {err}"),
    }
    match moved.find(&"7".to_string()) {
        Some(element) => println!("find \"7\": {element}"),
        None => println!("find \"7\": absent"),
    }
    println!();

    let forward = uset!["a", "b"];
    let backward = uset!["b", "a"];
    println!(
        "[a, b] == [b, a] (order-independent): {}",
        forward == backward
    );

    let mut shrunk = moved;
    let before = shrunk.capacity();
    shrunk.shrink_to_fit();
    println!(
        "shrink_to_fit: {before} -> {after} slots",
        after = shrunk.capacity()
    );

    Ok(())
}
