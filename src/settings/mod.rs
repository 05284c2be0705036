//! Branding and layout customization.
//!
//! A single settings document holds the titles, colours, layout options,
//! texts and logos shown by the client. It is edited through a dot-path
//! setter or a top-level merge, both validated against the typed schema in
//! [`domain`], and rendered as a theme stylesheet by [`theme`].

pub mod domain;
pub mod services;
pub mod theme;

#[cfg(test)]
mod tests;
