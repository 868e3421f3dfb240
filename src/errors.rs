//! Error types for the library, generated by `error_chain!`.
//!
//! Other modules `use crate::errors::*;` to get `Error`, `ErrorKind`, `Result` and `ResultExt`.
//! `ResultExt` adds the `chain_err` method for attaching context to a failure.

use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        // A maze dimension is zero or the pixel grid it implies is too large to address.
        InvalidDimension(name: &'static str, value: usize) {
            description("invalid maze dimension")
            display("invalid maze dimension: {} = {}", name, value)
        }
    }
}
