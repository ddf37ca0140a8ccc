pub mod error;
pub mod render;
pub mod shared;
pub mod target;
pub mod tree;

pub use error::{RenderError, TargetError};
pub use render::MapFormat;
pub use shared::SharedTree;
pub use target::{parse_target, target_segments};
pub use tree::{Node, PathTree};
