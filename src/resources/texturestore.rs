//! Loaded textures keyed by the texture keys entities carry in their
//! [`Visual`](crate::components::visual::Visual).

use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::constants::tex;

pub struct TextureStore {
    pub map: FxHashMap<&'static str, Texture2D>,
}

impl TextureStore {
    /// Load every texture the game uses. Fails on the first missing file.
    pub fn load_all(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Self, String> {
        let mut map = FxHashMap::default();
        for (key, path) in tex::ALL {
            let texture = rl
                .load_texture(thread, path)
                .map_err(|e| format!("Failed to load texture '{key}' from {path}: {e}"))?;
            map.insert(key, texture);
        }
        log::info!("Loaded {} textures", map.len());
        Ok(TextureStore { map })
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
