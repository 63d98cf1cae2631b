//! Entity definitions shared across the service and server crates.
//!
//! Every entity is a flat serde record with a server-assigned UUID id and
//! UTC timestamps. Updates are expressed as explicit patch types: a field
//! present in the patch replaces the stored value, an absent field keeps it.
//! Sub-objects (`pricing`, `artisan`, `socialMedia`, `guestInfo`) merge
//! field-by-field rather than being replaced wholesale.

pub mod booking;
pub mod experience;
pub mod member;
pub mod partner;
pub mod social;
pub mod team_member;
