//! HTTP handlers for the products resource.

pub mod product;
