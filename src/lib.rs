// src/lib.rs
// DOCUMENTATION: Library root shared by the server and the seed tool
// PURPOSE: Tourist places, feedback and wishlists over actix-web + SQLite

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod services;
pub mod views;
