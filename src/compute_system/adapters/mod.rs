//! Adapter implementations for compute-system discovery ports.

pub mod memory;

mod callback;

pub use callback::CallbackSink;
