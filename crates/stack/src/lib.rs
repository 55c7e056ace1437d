//! ## Usage
//!
//! ```
//! use bstack::{BoundedStack, Error};
//!
//! // A stack that holds at most three elements.
//! let mut stack = BoundedStack::new(3).unwrap();
//! stack.push(10).unwrap();
//! stack.push(20).unwrap();
//! stack.push(30).unwrap();
//! assert_eq!(stack.list(), "10;20;30");
//!
//! // Overflow and underflow are reported, never panicked on.
//! assert_eq!(stack.push(99), Err(Error::StackFull { capacity: 3 }));
//! assert_eq!(stack.pop(), Ok(30));
//! assert_eq!(stack.peek(), Ok(&20));
//!
//! stack.clear();
//! assert_eq!(stack.pop(), Err(Error::StackEmpty));
//! assert_eq!(stack.list(), "");
//! ```
pub mod error;
pub mod stack;

pub use error::{Error, Result};
pub use stack::*;
