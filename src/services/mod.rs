//! Services backing the hook handlers.
//!
//! - [`InstanceAllocator`]: picks and creates the next numbered instance directory
//! - [`PathManager`]: names of the workspace root, instance directories and reports
//! - [`WorkspaceFs`]: directory listing/creation seam, [`FsWorkspace`] in production

mod instance_allocator;
mod path_manager;
mod workspace;

pub use instance_allocator::InstanceAllocator;
pub use path_manager::{INSTANCE_PREFIX, PathManager, REPORT_FILES, STORAGE_DIR_NAME};
pub use workspace::{FsWorkspace, WorkspaceFs};
