pub mod api;
pub mod auth;
pub mod components;
pub mod decoration;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod storage;
