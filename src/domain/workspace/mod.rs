mod layout;
pub mod paths;
mod root;
mod stage;

pub use layout::{WorkspaceLayout, WorkspacePath};
pub use paths::{CONFIG_FILENAME, CRDS_DIR, DATA_DIR};
pub use root::{default_root, resolve_root};
pub use stage::StageRole;
