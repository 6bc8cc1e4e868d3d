//! Page composition: content tables in, markup tree out.

pub mod cards;
pub mod node;
pub mod scroll;
pub mod section;
pub mod sections;
pub mod site;
