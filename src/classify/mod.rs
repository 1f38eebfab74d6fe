//! Heuristic classifiers deciding what counts as real content.
//!
//! Each classifier takes an untrusted value, bounds it, and either returns a
//! cleaned value or drops it. Dropping is the normal outcome for noise and is
//! never reported as an error.

pub mod embed;
pub mod image;
pub mod meta;

pub use embed::limit_embed;
pub use image::{image_rejection, limit_img};
pub use meta::process_meta_entry;
