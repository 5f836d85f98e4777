pub mod ffi;
pub mod registry;

pub use registry::{GetRandomValues, NativeModule, Registry};
