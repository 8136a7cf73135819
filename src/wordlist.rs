use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::error;

/// Candidate path segments, one per line. Lines are trimmed, blank lines
/// dropped; file order and duplicates are preserved.
///
/// An empty result means the file could not be read — the caller treats
/// that as fatal for the run.
pub fn load(path: &Path) -> Vec<String> {
    match read(path) {
        Ok(words) => words,
        Err(err) => {
            error!("Wordlist loading failed: {}", err);
            Vec::new()
        }
    }
}

fn read(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dirprobe-wordlist-{}-{}.txt",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn blank_lines_are_dropped_and_order_kept() {
        let path = temp_file("blanks", "admin\n\nlogin\n  \nsecret\n");
        let words = load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["admin", "login", "secret"]);
    }

    #[test]
    fn lines_are_trimmed() {
        let path = temp_file("trim", "  admin  \n\tlogin\t\n");
        let words = load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["admin", "login"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let path = temp_file("dupes", "admin\nlogin\nadmin\n");
        let words = load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["admin", "login", "admin"]);
    }

    #[test]
    fn unreadable_file_yields_empty_list() {
        let path = std::env::temp_dir().join("dirprobe-wordlist-does-not-exist.txt");
        assert!(load(&path).is_empty());
    }
}
