use crate::core::{
    change_tree::{records_for_section, Section, TreeRow},
    error::{Result, WorkbenchError},
    git::GitRepo,
    panel_state::{load_panel_state, ChangePanelState},
    print_info,
    render::{render_branch_header, render_section_header, render_tree_row},
    status_kind::FileStatusRecord,
};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

/// Staged changes are listed above worktree changes
pub const DISPLAY_ORDER: [Section; 2] = [Section::Staged, Section::Changes];

pub fn execute_tree(section: Option<String>, json: bool) -> Result<()> {
    let sections = match section {
        Some(section) => vec![section.parse::<Section>()?],
        None => DISPLAY_ORDER.to_vec(),
    };

    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir).map_err(|_| WorkbenchError::NotInGitRepo)?;
    let records = git_repo.file_status_records()?;
    let state = load_state_or_default(&git_repo.get_repo_path());

    if json {
        let rows: BTreeMap<&str, Vec<TreeRow>> = sections
            .iter()
            .map(|section| (section.as_str(), state.section_rows(&records, *section)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let branch = git_repo
        .current_branch()
        .unwrap_or_else(|_| "-none-".to_string());
    println!();
    println!("{}", render_branch_header(&branch));

    if records.is_empty() {
        print_info("Working tree clean");
        return Ok(());
    }

    println!();
    for line in render_tree_lines(&records, &state, &sections) {
        println!("{line}");
    }
    println!();

    Ok(())
}

/// Section headers followed by their rows; sections without changes are omitted
pub fn render_tree_lines(
    records: &[FileStatusRecord],
    state: &ChangePanelState,
    sections: &[Section],
) -> Vec<String> {
    let mut lines = Vec::new();

    for section in sections {
        let count = records_for_section(records, *section).len();
        if count == 0 {
            continue;
        }

        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(render_section_header(
            *section,
            count,
            state.is_section_collapsed(*section),
        ));
        lines.extend(
            state
                .section_rows(records, *section)
                .iter()
                .map(render_tree_row),
        );
    }

    lines
}

pub(crate) fn load_state_or_default(repo_path: &Path) -> ChangePanelState {
    match load_panel_state(repo_path) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Ignoring unreadable panel state: {e}");
            ChangePanelState::default()
        }
    }
}
