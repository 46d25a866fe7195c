//! Best-score persistence
//!
//! A single integer under a fixed LocalStorage key. A missing or unreadable
//! value is treated as absent, and a missing store skips persistence
//! entirely; neither ever interrupts gameplay.

/// Best score across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore(u32);

/// Decode a stored value. Anything unreadable counts as absent.
pub fn parse_stored(raw: &str) -> Option<u32> {
    serde_json::from_str(raw).ok()
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cazador_highscore";

    pub fn value(self) -> u32 {
        self.0
    }

    /// Record a session score. Persists and returns true only on a new best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            self.save();
            true
        } else {
            false
        }
    }

    /// Load the stored best from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                match parse_stored(&raw) {
                    Some(value) => {
                        log::info!("Loaded high score {}", value);
                        return Self(value);
                    }
                    None => log::warn!("Stored high score is malformed, treating as absent"),
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::default()
    }

    /// Save the best to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    fn save(self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&self.0) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved ({})", self.0);
            }
        } else {
            log::warn!("No storage available, high score not persisted");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(self) {
        // No-op for native
    }
}
