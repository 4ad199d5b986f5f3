//! # spr-core
//!
//! Core types shared across the SPR (Student Placement Records) crates:
//! - Entity structs for students, offers, internships and reports
//! - Status enums stored as their display strings
//! - Entity kinds and cross-cutting error types
//! - ISO calendar date parsing for request payloads
//! - Record assembly: flat rows into the nested transport shape
//! - API response types (dashboard summary, delete confirmation)

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod records;
pub mod responses;
