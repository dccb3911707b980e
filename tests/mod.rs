// Integration tests for myschema

pub mod helpers;
pub mod unit;
