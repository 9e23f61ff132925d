pub mod aggregate;
pub mod directory;

pub use aggregate::{Account, AccountId};
pub use directory::{directory, AccountDirectory, AccountLookup};
