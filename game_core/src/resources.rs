use std::collections::HashMap;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Keys currently held down, keyed by `KeyboardEvent.key`.
///
/// Written by the key-down/key-up callbacks between frames and only read by
/// the simulation. A key that was never seen reads as released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    pub fn set(&mut self, key: &str, held: bool) {
        match self.held.get_mut(key) {
            Some(state) => *state = held,
            None => {
                self.held.insert(key.to_owned(), held);
            }
        }
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }

    /// Release everything, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        for state in self.held.values_mut() {
            *state = false;
        }
    }
}

/// Things that happened during the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounces: u32,
    pub paddle_hits: u32,
    pub resets: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounces = 0;
        self.paddle_hits = 0;
        self.resets = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.wall_bounces == 0 && self.paddle_hits == 0 && self.resets == 0
    }
}
