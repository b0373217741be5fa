//! Mudra hand-pose classification library.
//!
//! Mudra turns the 21 hand landmarks produced by an upstream hand-pose estimator into a per-finger
//! extended/folded classification. It does not perform any detection or landmark estimation
//! itself; the surrounding video pipeline is expected to feed it one [`pipeline::Frame`] per
//! camera frame.
//!
//! # 3D Coordinates
//!
//! Landmark positions use the upstream estimator's normalized image coordinates: X and Y are in
//! range 0 to 1 with Y pointing *down*, and Z is the depth relative to the wrist, with negative
//! values closer to the camera. The sign of Z is significant for the thumb rules in
//! [`hand::finger`].

use log::LevelFilter;

pub mod debounce;
pub mod geom;
pub mod hand;
pub mod pipeline;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and Mudra will log at *debug* level; `RUST_LOG` can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
