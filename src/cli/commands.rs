use crate::app::{AppContext, Result, SiftError};
use crate::domain::Item;
use crate::sort::SortKey;
use crate::view::ViewState;

pub async fn search(
    ctx: &AppContext,
    query: Option<&str>,
    pages: u32,
    sort: SortKey,
    reverse: bool,
) -> Result<()> {
    let mut session = ctx.session();
    let mut view = session.submit_search(query.unwrap_or("")).await;

    for _ in 1..pages {
        if view.error.is_some() || !view.has_more {
            break;
        }
        view = session.request_more().await?;
    }

    if let Some(error) = view.error.take() {
        return Err(SiftError::Transport(error.to_string()));
    }

    let state = session.on_sort(sort);
    if reverse && state.key != SortKey::None {
        session.on_sort(sort);
    }
    print_view(&session.view());
    Ok(())
}

fn print_view(view: &ViewState) {
    let query = view.active_query.as_deref().unwrap_or("");
    if view.items.is_empty() {
        println!("No results for \"{}\"", query);
        return;
    }

    for item in &view.items {
        println!("{}", format_row(item));
    }

    let hits = view
        .total_hits
        .map(|n| format!(" of {}", n))
        .unwrap_or_default();
    println!(
        "\n{} results{} for \"{}\" (through page {})",
        view.items.len(),
        hits,
        query,
        view.current_page + 1
    );
}

fn format_row(item: &Item) -> String {
    format!(
        "{:>5} pts {:>4} comments  {}  ({})\n      {}",
        item.score,
        item.comment_count,
        item.display_title(),
        item.author,
        item.link()
    )
}
