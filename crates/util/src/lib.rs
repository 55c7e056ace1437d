pub mod collections;
mod macros;
