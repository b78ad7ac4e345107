//! Generator definitions.
//!
//! Each submodule exposes a `generator()` constructor returning the step
//! table for one named generator. The tables are data; execution lives in
//! `crate::application::GeneratorService`.

pub mod feature;
pub mod init;
