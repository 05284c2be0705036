//! Image store adapters.

mod directory;
mod memory;

pub use directory::DirectoryImageStore;
pub use memory::InMemoryImageStore;

/// Joins a public URL prefix and an object name with a single slash.
fn public_url(prefix: &str, object_name: &str) -> String {
    format!("{}/{object_name}", prefix.trim_end_matches('/'))
}
