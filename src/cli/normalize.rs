use crate::text;

/// Execute the `normalize` command: print the normalized text.
pub fn execute(input: &str) {
    println!("{}", text::normalize(input));
}
