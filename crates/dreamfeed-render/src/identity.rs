use uuid::Uuid;

/// Source of synthetic chip keys.
///
/// Each call must return a token that is practically unique within one
/// render session. No uniqueness across processes is promised, and callers
/// must never compare keys against tag names or positions.
pub trait ChipKeyProvider {
    fn next_key(&mut self) -> String;
}

/// Default provider backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeyProvider;

impl UuidKeyProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ChipKeyProvider for UuidKeyProvider {
    fn next_key(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
