/// Set of functions used throughout to assure the coordinates stay within the supported range.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::CrossingPolicy;
#[doc(inline)]
pub use config::KernelConfig;
