//! In-process events and the pub/sub mechanics used to deliver them.
//!
//! The ordering workflow uses this to tell the line-item source that reference
//! data changed, instead of toggling a shared flag.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
