pub mod config;
pub mod entries;
pub mod error;
pub mod history;
pub mod persist;
pub mod spin;

pub use config::WheelConfig;
pub use entries::{parse_entries, shuffle_entries};
pub use error::WheelError;
pub use history::{History, SpinResult};
pub use persist::{EntryStore, KeyValueStore, MemoryStore};
pub use spin::{SpinAnimation, SpinFrame, SpinPhase, SpinPlan};
