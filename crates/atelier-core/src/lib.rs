#![forbid(unsafe_code)]

//! Core: host events, clocks, cancelable scheduling, listener bookkeeping,
//! viewport observation, and the scroll-reveal animation.

pub mod animation;
pub mod clock;
pub mod event;
pub mod listener;
pub mod schedule;
pub mod viewport;
