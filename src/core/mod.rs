// toolcase - core/mod.rs
//
// Pure logic layer.
// Dependencies: standard library, regex, walkdir (as an OS abstraction for
// directory traversal). Must NOT depend on: platform, rfd, or any dialog/UI
// crate.

pub mod discovery;
pub mod paths;
pub mod strings;
pub mod validate;
pub mod wildcard;
