pub mod bounds;
pub mod counts;
pub mod error;
pub mod precompute;
pub mod primes;
pub mod search;
pub mod sieve;
pub mod wheel;

pub use error::{Error, Result};
