//! Model -> entity conversions
//!
//! Status columns are stored as text, so post and comment rows convert
//! with `TryFrom` and surface an unknown status as a database error.

mod comment;
mod post;
mod user;
