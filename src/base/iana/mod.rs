//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that show up when decoding messages.
//!
//! Record types and option codes are newtypes around their raw integer
//! with associated constants for the well-known values. Any value decodes.
//! The same is true for response codes which are an enum with an `Int`
//! variant for unassigned values. Opcodes, on the other hand, are closed:
//! an unassigned opcode is a decoding error.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here.

pub use self::opcode::Opcode;
pub use self::opt::OptionCode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod opcode;
pub mod opt;
pub mod rcode;
pub mod rtype;
