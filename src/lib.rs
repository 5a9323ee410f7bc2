// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: float casts and comparisons against 0.0/1.0 are intended
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]

//! Bubble sort played back as an animation.
//!
//! Values are drawn as circles whose height and brightness follow the
//! value. Each comparison highlights a pair; each swap slides the pair into
//! place with an eased transition.
//!
//! # Key entry points
//!
//! - [`sort::BubbleSort`] - the phase-by-phase sort state machine
//! - [`schedule::Scheduler`] - the timer/frame port a host provides
//! - [`render::Canvas`] - the drawing port, with an SVG backend
//! - [`playback::Playback`] - runs a sort to completion on a virtual clock
//! - [`options::Options`] - appearance, pacing and sample configuration
//!
//! # Architecture
//!
//! The engine never blocks and never reads a clock. Every phase updates
//! the array synchronously, redraws, and asks the scheduler to call back
//! later. The swap slide is driven separately by display-refresh
//! callbacks and is cancelled by the next phase, so animation timing only
//! changes what the viewer sees, never the order of the sort.

pub mod error;
pub mod options;
pub mod playback;
pub mod render;
pub mod sampler;
pub mod schedule;
pub mod sort;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
