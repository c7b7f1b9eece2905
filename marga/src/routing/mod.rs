//! Local routers: the straight-line fast path and the greedy detour walker.
//!
//! Neither router searches. [`try_direct_route`] either accepts the straight
//! segment or reports it blocked; [`detour_route`] nudges its way around
//! whatever is immediately ahead. The grid search in
//! [`pathfinding`](crate::pathfinding) is the fallback when both fall short.

mod detour;
mod direct;

pub use detour::{DetourConfig, DetourRouter, MAX_DETOUR_STEPS, detour_route};
pub use direct::{DirectConfig, DirectRouter, MAX_SAMPLES, sample_segment, try_direct_route};
pub(crate) use direct::sample_count;
