//! Sprite asset naming and a caller-owned sprite sheet.
//!
//! The phase engine only computes the 8-way [`sprite_bucket`](crate::sprite_bucket).
//! Renderers ship up to 16 phase images named `moon_00` .. `moon_15`; the
//! sheet below holds whatever subset was loaded and degrades to slot 0.

use crate::error::MoonError;
use crate::phase::SPRITE_BUCKETS;

/// Number of named asset slots a sprite sheet can hold.
pub const SPRITE_SLOTS: usize = 16;

/// Asset stems for the 8 display buckets, named after the cycle percentage.
const BUCKET_ASSET_NAMES: [&str; SPRITE_BUCKETS as usize] = [
    "moon_00", "moon_12", "moon_25", "moon_37", "moon_50", "moon_62", "moon_75", "moon_87",
];

/// Percent-coded asset stem for a display bucket.
///
/// Buckets outside 0..=7 fall back to the new-moon image.
pub fn sprite_asset_name(bucket: u8) -> &'static str {
    BUCKET_ASSET_NAMES
        .get(bucket as usize)
        .copied()
        .unwrap_or(BUCKET_ASSET_NAMES[0])
}

/// Asset stem for a 16-slot sheet index, e.g. `moon_07`.
pub fn sprite_slot_name(slot: usize) -> String {
    format!("moon_{slot:02}")
}

/// Fixed-size table of loaded phase images, keyed by slot index.
///
/// Owned by the rendering layer; the phase engine never touches it.
#[derive(Debug, Clone)]
pub struct SpriteSheet<T> {
    slots: [Option<T>; SPRITE_SLOTS],
}

impl<T> Default for SpriteSheet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SpriteSheet<T> {
    /// An empty sheet.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Fill a sheet by calling `loader` with each slot name.
    ///
    /// Slots for which the loader returns `None` (missing asset) stay empty.
    pub fn load_with<F>(mut loader: F) -> Self
    where
        F: FnMut(&str) -> Option<T>,
    {
        let mut sheet = Self::new();
        for (slot, entry) in sheet.slots.iter_mut().enumerate() {
            *entry = loader(&sprite_slot_name(slot));
        }
        log::debug!("sprite sheet loaded {} of {SPRITE_SLOTS} slots", sheet.len());
        sheet
    }

    /// Store `sprite` in `slot`, returning the previous occupant.
    pub fn insert(&mut self, slot: usize, sprite: T) -> Result<Option<T>, MoonError> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(MoonError::InvalidArgument("sprite slot must be < 16"))?;
        Ok(entry.replace(sprite))
    }

    /// Look up a sprite by index.
    ///
    /// The index is clamped into 0..=15; an empty slot falls back to slot 0.
    pub fn get(&self, index: i32) -> Option<&T> {
        let slot = index.clamp(0, SPRITE_SLOTS as i32 - 1) as usize;
        self.slots[slot].as_ref().or(self.slots[0].as_ref())
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
