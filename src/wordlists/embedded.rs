//! Embedded root word list
//!
//! Root words compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/start.rs"));
