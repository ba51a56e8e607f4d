//! Daily session persistence
//!
//! Remembers which flags were solved without a hint today. Storage problems
//! never reach the player: the worst case is that today's progress is
//! forgotten.

mod clock;
mod daily;
mod key;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use daily::{CompletedSet, DailySessionStore};
pub use key::{DayKey, KEY_PREFIX};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
