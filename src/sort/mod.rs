//! Bubble-sort animation state machine.
//!
//! [`BubbleSort`] owns the array and the sort cursor and runs one
//! [`Phase`] per `advance` call. The logical sort (swaps, cursor and round
//! bookkeeping) always completes synchronously inside the phase; the swap
//! slide ([`SwapAnimation`]) only changes how elements are drawn, so
//! pacing can never affect the result.

mod element;
mod engine;
mod phase;
mod swap;

pub use element::{Element, ValueRange};
pub use engine::{BubbleSort, SortStats, SortStyle};
pub use phase::Phase;
pub use swap::SwapAnimation;
