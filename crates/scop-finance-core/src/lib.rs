pub mod error;
pub mod types;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "financing")]
pub mod financing;

pub use error::ScopFinanceError;
pub use types::*;

/// Standard result type for all scop-finance operations
pub type ScopFinanceResult<T> = Result<T, ScopFinanceError>;
