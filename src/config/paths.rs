//! Platform directories for stored frames and log files.

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "framesets")
}

/// `$XDG_DATA_HOME/framesets/frames`, or `.framesets/frames` when no home is known.
pub fn default_frames_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("frames"))
        .unwrap_or_else(|| PathBuf::from(".framesets/frames"))
}

/// `$XDG_STATE_HOME/framesets/framesets.log` where available, else the local data dir.
pub fn default_log_file() -> PathBuf {
    project_dirs()
        .map(|dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_local_dir())
                .join("framesets.log")
        })
        .unwrap_or_else(|| PathBuf::from(".framesets/framesets.log"))
}
