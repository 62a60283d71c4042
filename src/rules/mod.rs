//! Rule implementations for unstrung.
//!
//! Rules are pure functions over the sets produced by the core pipeline.
//! They take only the inputs they need and never touch the filesystem.
//!
//! - `unused`: Declared but never referenced string resources

pub mod unused;
