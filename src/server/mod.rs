//! Socket setup and the accept loop.

pub mod listener;
