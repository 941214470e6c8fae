use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::entry::Entry;

/// Serialize the aggregated list as a JSON array and write it in one go.
/// Nothing is written unless the full 9-page set extracted cleanly.
pub fn write_json(path: &Path, entries: &[Entry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries).context("Failed to serialize entries")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Operator summary: count plus the full word list.
pub fn print_summary(entries: &[Entry]) {
    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    println!("{} entries: {}", entries.len(), words.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_preserves_field_and_sequence_order() {
        let entries = vec![
            Entry {
                word: "へけっ".into(),
                meaning: "びっくり".into(),
                hint: "おどろいたとき".into(),
                example: "へけっ！なんだなあ。".into(),
            },
            Entry {
                word: "とっとこ".into(),
                meaning: "てくてく".into(),
                hint: "あるくようす".into(),
                example: "とっとこ はしる。".into(),
            },
        ];
        let json = serde_json::to_string(&entries).unwrap();
        let w = json.find("\"word\"").unwrap();
        let m = json.find("\"meaning\"").unwrap();
        let h = json.find("\"hint\"").unwrap();
        let e = json.find("\"example\"").unwrap();
        assert!(w < m && m < h && h < e);
        assert!(json.find("へけっ").unwrap() < json.find("とっとこ").unwrap());
    }

    #[test]
    fn writes_the_file() {
        let dir = std::env::temp_dir().join("hamugo_output_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hamugo.json");
        let entries = vec![Entry {
            word: "はむはー".into(),
            meaning: "わーい".into(),
            hint: "うれしいとき".into(),
            example: "はむはー！たねだ！".into(),
        }];
        write_json(&path, &entries).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("はむはー"));
        fs::remove_file(&path).unwrap();
    }
}
