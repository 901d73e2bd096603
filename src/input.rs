use anyhow::{Context, Result};

/// Load raw image bytes from an HTTP(S) URL, a file:// URL, or a local path
pub fn load_bytes(source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        // Download from HTTP/HTTPS
        let response = reqwest::blocking::get(source)
            .with_context(|| format!("Failed to fetch {source}"))?;
        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response body from {source}"))?;
        Ok(bytes.to_vec())
    } else {
        // Handle local file URLs and plain paths
        let path = source.strip_prefix("file://").unwrap_or(source);
        std::fs::read(path).with_context(|| format!("Failed to read {path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_local_path() {
        let path = std::env::temp_dir().join("picascii-input-test.bin");
        fs::write(&path, b"fake image bytes").unwrap();

        let bytes = load_bytes(path.to_str().unwrap()).unwrap();
        assert_eq!(bytes, b"fake image bytes");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_file_url() {
        let path = std::env::temp_dir().join("picascii-input-url-test.bin");
        fs::write(&path, b"via file url").unwrap();

        let url = format!("file://{}", path.display());
        let bytes = load_bytes(&url).unwrap();
        assert_eq!(bytes, b"via file url");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_path_fails() {
        let result = load_bytes("/definitely/not/a/real/path.png");
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to read"));
    }
}
