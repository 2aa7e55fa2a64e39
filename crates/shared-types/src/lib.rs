pub mod error;
pub mod feature_flags;

// Session and profile types
pub mod models;

// Dashboard view-models
pub mod records;
pub mod stats;
pub mod status;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use records::*;
pub use stats::*;
pub use status::*;
