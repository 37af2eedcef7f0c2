//! Embedded dictionary
//!
//! English word set compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
