use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::frame::Frame;

const CACHE_DIR: &str = ".cache/picascii";
const CACHE_EXPIRY_DAYS: u64 = 30;

#[derive(Serialize, Deserialize)]
pub struct CachedFrame {
    pub frame: Frame,
    pub cached_at: u64, // Unix timestamp
}

pub struct FrameCache {
    pub cache_dir: PathBuf,
}

impl FrameCache {
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME")?;
        let cache_dir = Path::new(&home).join(CACHE_DIR);

        // Create cache directory if it doesn't exist
        fs::create_dir_all(&cache_dir)?;

        Ok(Self { cache_dir })
    }

    pub fn get(&self, image_bytes: &[u8], width: u32) -> Option<Frame> {
        let cache_key = self.generate_cache_key(image_bytes, width);
        let cache_path = self.cache_dir.join(format!("{cache_key}.json"));

        // Check if cache file exists
        if !cache_path.exists() {
            return None;
        }

        // Read and deserialize
        match fs::read_to_string(&cache_path) {
            Ok(contents) => {
                match serde_json::from_str::<CachedFrame>(&contents) {
                    Ok(cached) => {
                        // Check if cache is expired
                        if self.is_expired(cached.cached_at) {
                            // Delete expired cache
                            let _ = fs::remove_file(&cache_path);
                            None
                        } else {
                            Some(cached.frame)
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to deserialize cache: {e}");
                        // Delete invalid cache file
                        let _ = fs::remove_file(&cache_path);
                        None
                    }
                }
            }
            Err(e) => {
                eprintln!("Failed to read cache file: {e}");
                None
            }
        }
    }

    pub fn set(&self, image_bytes: &[u8], width: u32, frame: Frame) -> Result<()> {
        let cache_key = self.generate_cache_key(image_bytes, width);
        let cache_path = self.cache_dir.join(format!("{cache_key}.json"));

        let cached = CachedFrame {
            frame,
            cached_at: SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
        };

        let json = serde_json::to_string(&cached)?;
        fs::write(cache_path, json)?;

        Ok(())
    }

    fn generate_cache_key(&self, image_bytes: &[u8], width: u32) -> String {
        // SHA256 over the image bytes and the target width, so the same
        // image rendered at two widths gets two entries
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(image_bytes);
        hasher.update(width.to_le_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn is_expired(&self, cached_at: u64) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        // Handle future timestamps (should not be expired)
        if cached_at > now {
            return false;
        }

        let age_days = (now - cached_at) / (60 * 60 * 24);
        age_days > CACHE_EXPIRY_DAYS
    }

    pub fn clear(&self) -> Result<()> {
        // Remove all cache files
        for entry in fs::read_dir(&self.cache_dir)? {
            let entry = entry?;
            if entry.path().extension().and_then(|s| s.to_str()) == Some("json") {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }

    pub fn size(&self) -> Result<u64> {
        let mut total_size = 0;
        for entry in fs::read_dir(&self.cache_dir)? {
            let entry = entry?;
            if entry.path().extension().and_then(|s| s.to_str()) == Some("json") {
                total_size += entry.metadata()?.len();
            }
        }
        Ok(total_size)
    }
}
