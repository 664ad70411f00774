//! Markup rendering
//!
//! Terminal step of a composition: a normalized nested mapping/array
//! document goes in, pretty-printed XML text comes out.

pub mod xml;

pub use xml::render_document;
