//! Token formatter tests

mod properties;
