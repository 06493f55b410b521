//! Basic usage examples for `Set`

use smol_set::{Set, set};

fn main() {
    println!("=== Set Basic Usage ===\n");

    // Create a new empty set
    let mut colors = Set::new();
    println!("Created new set");
    println!("Is empty? {}\n", colors.is_empty());

    // Insert some elements, one of them twice
    colors.insert("red");
    colors.insert("green");
    colors.insert("blue");
    colors.insert("red");

    println!("Inserted red, green, blue, red");
    println!("Number of elements: {}", colors.len());
    println!("Is singleton? {}\n", colors.is_singleton());

    // Membership
    println!("Checking membership:");
    for c in ["red", "yellow", "blue"] {
        println!(
            "  {c}: {}",
            if colors.contains(c) { "present" } else { "absent" }
        );
    }

    // Some element, in no particular order
    if let Some(any) = colors.first() {
        println!("\nSome element: {any}");
    }

    // Integer ranges
    println!("\nSet::range(1, 5) = {:?}", Set::range(1, 5));
    println!("Set::range(5, 1) is empty? {}", Set::range(5, 1).is_empty());

    // Subsets and equality
    let primary = set!["red", "blue"];
    println!("\n{primary:?} is a subset of {colors:?}? {}", primary.is_subset_of(&colors));
    println!("{primary:?} == {colors:?}? {}", primary == colors);
}
