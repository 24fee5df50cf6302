use crate::commands::tree::{execute_tree, load_state_or_default};
use crate::core::{
    change_tree::Section,
    error::{Result, WorkbenchError},
    git::GitRepo,
    panel_state::save_panel_state,
};
use std::env;

/// Toggles a directory of `section`, or the whole section when `path` is empty
pub fn execute_collapse(section: String, path: Option<String>) -> Result<()> {
    let section = section.parse::<Section>()?;

    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir).map_err(|_| WorkbenchError::NotInGitRepo)?;
    let repo_path = git_repo.get_repo_path();
    let mut state = load_state_or_default(&repo_path);

    match path.as_deref().map(normalize_dir_path).filter(|p| !p.is_empty()) {
        Some(dir) => {
            let collapsed = state.toggle_dir(section, &dir);
            log::debug!("Directory {section}:{dir} collapsed = {collapsed}");
        }
        None => {
            let collapsed = state.toggle_section(section);
            log::debug!("Section {section} collapsed = {collapsed}");
        }
    }

    save_panel_state(&repo_path, &state)?;
    execute_tree(None, false)
}

/// `./src/core/` and `src//core` both become `src/core`
pub fn normalize_dir_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}
