//! Demonstrates set operations with `Set`
#![allow(clippy::many_single_char_names)]

use std::borrow::Cow;

use smol_set::set;

fn main() {
    println!("=== Set Operations ===\n");

    let a = set![1, 2, 3, 5, 8];
    let b = set![2, 3, 5, 7, 11];

    println!("Set A: {a:?}");
    println!("Set B: {b:?}");
    println!();

    // Union (A ∪ B)
    let union = a.union(&b);
    println!("Union (A ∪ B): {:?}", sorted(&union));
    println!("Expected: [1, 2, 3, 5, 7, 8, 11]\n");

    // Intersection (A ∩ B)
    let intersection = a.intersection(&b);
    println!("Intersection (A ∩ B): {:?}", sorted(&intersection));
    println!("Expected: [2, 3, 5]\n");

    // Difference (A - B)
    let difference = a.minus(&b);
    println!("Difference (A - B): {:?}", sorted(&difference));
    println!("Expected: [1, 8]\n");

    // Filter
    let odd = a.filter(|e| e % 2 == 1);
    println!("Odd elements of A: {:?}", sorted(&odd));
    println!("Expected: [1, 3, 5]\n");

    // No-op operations hand back an input instead of copying it
    let c = set![100, 200];
    match a.minus(&c) {
        Cow::Borrowed(_) => println!("A - {{100, 200}} returned A itself"),
        Cow::Owned(_) => println!("A - {{100, 200}} built a new set"),
    }
    match intersection.union(&a) {
        Cow::Borrowed(_) => println!("(A ∩ B) ∪ A returned A itself"),
        Cow::Owned(_) => println!("(A ∩ B) ∪ A built a new set"),
    }
}

fn sorted(set: &smol_set::Set<i32>) -> Vec<i32> {
    let mut v = set.to_vec();
    v.sort_unstable();
    v
}
