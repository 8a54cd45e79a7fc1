// Folder validation
// Decides whether a caller-supplied path is a directory worth prompting for

pub mod folder;
pub mod result;

pub use folder::{DEFAULT_EXTENSION, FolderRejection, check_folder, find_config_files, validate_folder_path};
pub use result::ValidationResult;
