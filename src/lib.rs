//! Admin Stay - hotel administration front end
//!
//! A client-side web UI for the Admin Stay hotel backend.
//!
//! This library provides:
//! - Login/registration against the backend auth endpoints
//! - CRUD screens for customers, rooms and reservations
//! - A dashboard aggregating counts and recent activity
//! - Session persistence across browser restarts ("remember me")
//!
//! All business logic (availability, pricing, status transitions) lives in
//! the backend; this crate only renders screens and issues REST calls.

// =============================================================================
// Lints
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app
pub mod app;

// Backend base-URL configuration
pub mod config;
