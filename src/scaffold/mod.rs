//! Folder creation and stub files for create mode.

mod folders;
mod stubs;

pub use folders::{create_folder, FolderRegistry, RegisteredFolder};
pub use stubs::{parse_selection, stub_path, write_stub, StubOutcome};
