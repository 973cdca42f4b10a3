//! Purchase-order composition (pure domain, no IO).
//!
//! This crate turns the operator's per-vehicle input into order lines, holds the
//! order draft being assembled, and defines the wire payloads exchanged with the
//! order endpoint. Talking to the backend is the desktop crate's job.

pub mod event;
pub mod line;
pub mod order;

pub use event::{OrderPlaced, OrderingEvent};
pub use line::{
    LineInputs, NumberInput, OrderLine, RowInput, capture_lines, parse_id_list, parse_quantity,
};
pub use order::{CreatedOrder, OrderDraft, OrderReceipt, OrderRequest, SubmissionStatus};
