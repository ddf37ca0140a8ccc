// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    build_tree, collect_targets, load_urls_from_file, load_urls_from_reader, parse_url_line,
    render_map,
};

// Re-export the tree types from sitetree-core
pub use sitetree_core::{MapFormat, Node, PathTree};
