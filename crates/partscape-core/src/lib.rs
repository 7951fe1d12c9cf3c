//! Partscape Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Partscape layout
//! engine and its command-line front end. It includes:
//!
//! - **Geometry**: 3D scene vectors and 2D diagram primitives ([`geometry`] module)
//! - **Colors**: CSS color validation ([`color::Color`])
//! - **Model**: The build input schema of parts and wiring ([`model`] module)
//! - **Category**: The closed part classification tags ([`category`] module)

pub mod category;
pub mod color;
pub mod geometry;
pub mod model;
