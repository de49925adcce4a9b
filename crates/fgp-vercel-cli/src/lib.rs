//! Presentation layer for the Vercel daemon client

pub mod commands;
pub mod display;
