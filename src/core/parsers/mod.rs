//! Resource definition file parsers.
//!
//! - `xml`: Android `strings.xml` parser

pub mod xml;
