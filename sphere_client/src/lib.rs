//! `sphere_client`
//!
//! Host-side scaffolding around `sphere_core`: key-state sampling and
//! intent mapping for the headless demo driver.

pub mod input;
