use crate::core::{
    config::WorkbenchConfig,
    error::{Result, WorkbenchError},
    print_info, print_success,
    render::render_search_result,
};
use crate::search::{LocalThreadStore, SearchController, SearchOptions, SearchPhase};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub query: String,
    pub workspace: Option<String>,
    pub threads: Option<PathBuf>,
    /// 1-based result number to open
    pub select: Option<usize>,
}

pub fn execute_search(args: SearchArgs) -> Result<()> {
    let config = WorkbenchConfig::load_or_create()?;
    let threads_file = match &args.threads {
        Some(path) => path.clone(),
        None => config.threads_file()?,
    };
    let workspace = args
        .workspace
        .clone()
        .unwrap_or_else(|| config.default_workspace.clone());

    let store = Arc::new(LocalThreadStore::open(
        &threads_file,
        config.search.max_results,
    )?);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_search(store, workspace, config.search.options(), args))
}

async fn run_search(
    store: Arc<LocalThreadStore>,
    workspace: String,
    options: SearchOptions,
    args: SearchArgs,
) -> Result<()> {
    let min_query_chars = options.min_query_chars;
    let mut controller = SearchController::new(
        workspace,
        store.clone(),
        store.clone(),
        store.clone(),
        options,
    );

    controller.open();
    controller.set_query(args.query.as_str());
    let session = controller.settled().await;

    if session.phase == SearchPhase::Idle {
        print_info(&format!(
            "Type at least {min_query_chars} characters to search"
        ));
        return Ok(());
    }

    if let Some(message) = session.error {
        return Err(WorkbenchError::search_failed(message));
    }

    if session.results.is_empty() {
        print_info(&format!("No messages match \"{}\"", args.query.trim()));
        if args.select.is_some() {
            return Err(WorkbenchError::NoResults);
        }
        return Ok(());
    }

    println!(
        "\n{} {}\n",
        "Results for".white(),
        format!("\"{}\":", args.query.trim()).blue()
    );
    for (i, result) in session.results.iter().enumerate() {
        let title = store.thread_title(&result.thread_id);
        println!("{}", render_search_result(i + 1, result, title.as_deref()));
    }

    let Some(n) = args.select else {
        println!();
        return Ok(());
    };

    if n == 0 || n > session.results.len() {
        return Err(WorkbenchError::result_out_of_range(n, session.results.len()));
    }

    controller.set_active_index(n - 1);
    let thread_id = session.results[n - 1].thread_id.clone();
    if controller.select_active().await {
        let title = store
            .thread_title(&thread_id)
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| thread_id.clone());
        print_success(&format!("Opened thread {title}"));
        println!();
    } else if let Some(message) = controller.session().error {
        return Err(WorkbenchError::search_failed(message));
    } else {
        print_info(&format!("Thread {thread_id} is no longer available"));
    }

    Ok(())
}
