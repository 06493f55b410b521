//! Demonstrates the range encoding of integer sets

use smol_set::{Set, SetRange, set};

fn main() {
    println!("=== Range Encoding ===\n");

    let s = set![1, 2, 3, 6, 7, 10, 11, 12];
    let ranges = s.ranges();

    println!("Set: {s:?}");
    println!("Ranges: {ranges}");
    for range in &ranges {
        match range {
            SetRange::Single(n) => println!("  single {n}"),
            SetRange::Run(low, high) => println!("  run {low}..={high}"),
        }
    }

    // Parse the text form back into a set
    let text = "0-4, 9, 20-22";
    match text.parse::<Set<u32>>() {
        Ok(parsed) => println!("\nParsed {text:?}: {} elements", parsed.len()),
        Err(err) => println!("\nFailed to parse {text:?}: {err}"),
    }

    // Errors report where the input went wrong
    if let Err(err) = "1-3, 9-4".parse::<Set<u32>>() {
        println!("Error: {err}");
    }
}
