use std::fs;

use tempfile::tempdir;
use tkpass::exportfile::export_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("passwords.txt");
        let written = export_file("abc\ndef", &path, |_| panic!("no prompt for a new file")).unwrap();
        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc\ndef");
    }

    #[test]
    fn test_declined_overwrite_keeps_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "old").unwrap();
        let written = export_file("new", &path, |_| Ok(false)).unwrap();
        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn test_confirmed_overwrite_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "old").unwrap();
        assert!(export_file("new", &path, |_| Ok(true)).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_prompt_error_is_propagated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "old").unwrap();
        let result = export_file("new", &path, |_| Err(anyhow::anyhow!("stdin closed")));
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }
}
