//! Greets everyone on the command line.

use std::env;

const GREETING: &str = "Hello";

fn main() {
    let names: Vec<String> = env::args().skip(1).collect();
    for (i, name) in names.iter().enumerate() {
        println!("{} #{}: {}, {{braces}} and \\backslash\\", GREETING, i + 1, name);
    }
}
