// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note(size: usize) -> String {
    let base = "Plan for the week #work\n\n- [ ] write **report** draft\n- [x] send `invoice.pdf`\n1. call the bank\n2. check https://bank.example/status.\n* read [the guide](https://docs.example)\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "Line {i} with *italic*, ***both***, ~~gone~~, `code {i}`, ![img](a.png) and #tag{i}\n"
        ));
    }
    content
}

#[allow(dead_code)]
pub fn known_tags(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("tag{i}")).chain(["work".to_string()]).collect()
}
