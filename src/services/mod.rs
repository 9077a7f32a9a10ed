//! Domain services used by the routes.
//!
//! ARCHITECTURE
//! ============
//! Services own long-running work (timers, tasks) so route handlers can stay
//! focused on protocol translation.

pub mod animation;
