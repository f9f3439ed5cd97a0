use std::collections::HashSet;
use std::{env, fs, path::Path};

const WORDLIST: &str = "data/wordlist.txt";

// 每行格式: 编号<TAB>单词
fn parse_line(number: usize, line: &str) -> &str {
    let (index, word) = line
        .split_once('\t')
        .unwrap_or_else(|| panic!("{}:{}: expected `index<TAB>word`, got {:?}", WORDLIST, number, line));
    if index.trim().parse::<u32>().is_err() {
        panic!("{}:{}: invalid index {:?}", WORDLIST, number, index);
    }
    let word = word.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        panic!("{}:{}: word must be lowercase ASCII letters, got {:?}", WORDLIST, number, word);
    }
    word
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("word_data.rs");

    let content = fs::read_to_string(WORDLIST)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", WORDLIST, e));

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let word = parse_line(i + 1, line);
        // 内置单词表不允许重复
        if !seen.insert(word) {
            panic!("{}:{}: duplicate word {:?}", WORDLIST, i + 1, word);
        }
        words.push(format!("{:?}", word));
    }
    if words.is_empty() {
        panic!("{} contains no words", WORDLIST);
    }

    let code = format!(
        "pub static WORDS: [&str; {}] = [{}];\n",
        words.len(),
        words.join(", ")
    );
    fs::write(dest_path, code).expect("Failed to write generated word list");

    println!("cargo:rerun-if-changed={}", WORDLIST);
}
