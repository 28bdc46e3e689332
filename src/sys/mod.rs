pub mod runtime;
pub mod snapshot;
