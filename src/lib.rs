//! `swtools` is a semi-modular toolkit of small, reliable libraries for
//! analysing SWIFT simulation runs
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use swtools_utils as utils;

#[cfg(feature = "stdout")]
#[cfg_attr(docsrs, doc(cfg(feature = "stdout")))]
#[doc(inline)]
pub use swtools_stdout as stdout;

#[cfg(feature = "timesteps")]
#[cfg_attr(docsrs, doc(cfg(feature = "timesteps")))]
#[doc(inline)]
pub use swtools_timesteps as timesteps;
