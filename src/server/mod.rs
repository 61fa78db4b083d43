//! TCP listener and connection dispatch

pub mod listener;
