#[macro_use]
extern crate lazy_static;
extern crate unicode_segmentation;

pub mod error;
pub mod scanner;
pub mod source_loc;
pub mod token;
pub mod util;
