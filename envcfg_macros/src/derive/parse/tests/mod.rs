//! Unit tests for derive attribute and type parsing.

mod lit;
mod type_utils;
