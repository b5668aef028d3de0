//! Build script to generate the embedded dictionary
//!
//! Reads the tab-separated dictionary file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        "data/dictionary.tsv",
        &Path::new(&out_dir).join("dictionary.rs"),
        "EMBEDDED",
        "Built-in dictionary entries as (word, definition) pairs",
    );

    // Rebuild if the dictionary changes
    println!("cargo:rerun-if-changed=data/dictionary.tsv");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(String, String)> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (word, definition) = line
                .split_once('\t')
                .unwrap_or_else(|| panic!("Missing tab separator in {input_path}: {line}"));
            (
                word.trim().to_lowercase(),
                definition.trim().replace("\\n", "\n"),
            )
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, definition) in &entries {
        writeln!(output, "    ({word:?}, {definition:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
