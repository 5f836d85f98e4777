pub mod adapter;
pub mod buffer;
pub mod error;
pub mod service;
pub mod subsystem;

pub use adapter::SubsystemRng;
pub use buffer::BufferDescriptor;
pub use error::{FillError, InitError, RngResult};
pub use service::RandomFillService;
pub use subsystem::{EntropySource, OsEntropy, RandomSubsystem};
