//! API response tests

mod convert;
