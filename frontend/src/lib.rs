//! Storefront frontend library entry point.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub(crate) mod routes;
pub(crate) mod pages;
pub(crate) mod components;
pub mod api;
