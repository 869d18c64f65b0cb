pub mod mocks;

pub use mocks::{MockLookup, RecordingDelay};
