//! Favorites tile list (favtiles)
//!
//! Reconciles a starred/frequent contact list into display order and keeps it
//! consistent through drag reordering and swipe removal.
//!
//! The pure core lives in [`engine`] (arrangement, reflow, row layout) and
//! [`model`]; [`source`], [`store`], [`config`] and [`logging`] form the
//! impure shell used by the binary.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod session;
pub mod source;
pub mod store;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
