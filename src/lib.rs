#![cfg_attr(not(feature = "unsafe"), deny(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod container;
mod error;
mod stack;

pub use container::{all_items_match, Container, SuffixableContainer};
pub use error::{Error, Result};
pub use stack::Stack;
