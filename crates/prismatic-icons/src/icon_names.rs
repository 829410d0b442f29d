//! Canonical theme icon names.
//!
//! Bare names as icon themes spell them, for use with
//! [`IconEngine::get_themed`](crate::IconEngine::get_themed).

pub const FOLDER: &str = "folder";
pub const USER_HOME: &str = "user-home";
pub const USER_DESKTOP: &str = "user-desktop";
pub const FOLDER_DOCUMENTS: &str = "folder-documents";
pub const FOLDER_DOWNLOAD: &str = "folder-download";
pub const FOLDER_MUSIC: &str = "folder-music";
pub const FOLDER_PICTURES: &str = "folder-pictures";
pub const FOLDER_TEMPLATES: &str = "folder-templates";
pub const FOLDER_VIDEOS: &str = "folder-videos";
pub const EMBLEM_SYMBOLIC_LINK: &str = "emblem-symbolic-link";
