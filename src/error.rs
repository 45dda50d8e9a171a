use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("Treasure weight must be positive (value: {value}, weight: 0)")]
    ZeroWeight { value: u64 },

    #[error("Hollow '{id}' does not exist in this maze")]
    HollowNotFound { id: usize },

    #[error("A hollow must be created with at least one treasure")]
    EmptyTreasureSet,
}
