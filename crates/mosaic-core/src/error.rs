use thiserror::Error;

/// Failures a texture atlas reports when asked for an icon slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("icon name must not be empty")]
    EmptyName,
    #[error("icon `{0}` is already registered")]
    Duplicate(String),
    #[error("atlas is full ({capacity} icons)")]
    Full { capacity: usize },
}
