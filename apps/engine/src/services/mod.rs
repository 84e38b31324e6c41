pub mod session;


pub use session::{Notifier, SessionService, SnapshotStore};
