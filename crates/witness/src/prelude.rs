//! This module exports the witness builders and their types for convenience.

pub use super::{
    assembler::*, errors::*, ordering::*, slot::*, spend_info::*, spend_path::*,
};
