#![no_std]

//! Route codec shared by the quoter and anything else that walks mixed routes.
//!
//! Layout: `token (56B strkey) [fee (3B big-endian) token (56B strkey)]*`

mod path;
mod selector;

pub use path::*;
pub use selector::*;
