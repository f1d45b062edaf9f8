use std::path::Path;

use crate::error::{CgpaError, Result};

use super::Transcript;

/// Read a transcript file, dispatching on the extension: `.toml` or `.json`.
pub fn load_transcript(path: &Path) -> Result<Transcript> {
    if !path.exists() {
        return Err(CgpaError::PathNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();

    if extension.eq_ignore_ascii_case("toml") {
        toml::from_str(&content)
            .map_err(|e| CgpaError::TranscriptParse(format!("{}: {}", path.display(), e)))
    } else if extension.eq_ignore_ascii_case("json") {
        serde_json::from_str(&content)
            .map_err(|e| CgpaError::TranscriptParse(format!("{}: {}", path.display(), e)))
    } else {
        Err(CgpaError::UnsupportedFormat(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_toml_transcripts() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("transcript.toml");
        fs::write(
            &path,
            r#"
[[semester]]
mode = "direct-sgpa"
sgpa = 8.5
"#,
        )
        .expect("transcript should write");

        let transcript = load_transcript(&path).expect("transcript should load");
        assert_eq!(transcript.semesters.len(), 1);
    }

    #[test]
    fn loads_json_transcripts() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("transcript.json");
        fs::write(
            &path,
            r#"{"semester": [{"mode": "grades", "subject": [{"grade": "AA", "credits": 4}]}]}"#,
        )
        .expect("transcript should write");

        let transcript = load_transcript(&path).expect("transcript should load");
        assert_eq!(transcript.semesters[0].subjects.len(), 1);
    }

    #[test]
    fn missing_file_is_a_path_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let result = load_transcript(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CgpaError::PathNotFound(_))));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("transcript.txt");
        fs::write(&path, "not a transcript").expect("file should write");

        let result = load_transcript(&path);
        assert!(matches!(result, Err(CgpaError::UnsupportedFormat(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[semester").expect("file should write");

        let result = load_transcript(&path);
        assert!(matches!(result, Err(CgpaError::TranscriptParse(_))));
    }
}
