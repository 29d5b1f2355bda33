//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tempfile::TempDir;

/// Simplified sample whose characters all have a unique 1:1 Traditional
/// counterpart in the character map, so exact round-trips hold for it.
pub const SIMPLIFIED_SAMPLE: &str = "汉马书龙门鱼";

/// The exact Traditional counterpart of `SIMPLIFIED_SAMPLE`.
pub const TRADITIONAL_SAMPLE: &str = "漢馬書龍門魚";

/// A longer Simplified sentence for encoding-detection tests; statistical
/// detection needs more than a couple of characters to lock on.
pub const SIMPLIFIED_SENTENCE: &str =
    "汉字转换工具读取输入文件并将简体字符逐个替换为繁体字符，其余内容保持不变。";

/// A longer Traditional sentence for Big5 detection tests.
pub const TRADITIONAL_SENTENCE: &str =
    "漢字轉換工具讀取輸入文件並將繁體字符逐個替換為簡體字符，其餘內容保持不變。";

/// Create a temporary directory for fixture files
pub fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write `text` into `dir/name` encoded with `encoding`
pub fn write_encoded_file(
    dir: &Path,
    name: &str,
    text: &str,
    encoding: &'static Encoding,
) -> PathBuf {
    let (bytes, _, had_errors) = encoding.encode(text);
    assert!(
        !had_errors,
        "fixture text must encode cleanly in {}",
        encoding.name()
    );
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Write `text` into `dir/name` as UTF-8
pub fn write_utf8_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

/// Generate a mixed ASCII/Han string of `len` characters for property-style
/// assertions (length preservation, pass-through)
pub fn random_mixed_text(len: usize) -> String {
    use rand::seq::SliceRandom;
    use rand::Rng;

    let han: Vec<char> = hanconv::pipeline::charmap_data::SIMPLIFIED.chars().collect();
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.5) {
                *han.choose(&mut rng).unwrap()
            } else {
                rng.gen_range(b' '..=b'~') as char
            }
        })
        .collect()
}
