use yew::prelude::*;

use crate::utils::constants::PER_PAGE;
use crate::utils::pagination::total_pages;

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub page: u32,
    pub count: u64,
    pub on_page_change: Callback<u32>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let pages = total_pages(props.count, PER_PAGE);
    let page = props.page;

    let prev = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page.saturating_sub(1).max(1)))
    };
    let next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page + 1))
    };

    html! {
        <div class="pagination">
            <button class="pagination-prev" disabled={page <= 1} onclick={prev}>
                {"Anterior"}
            </button>
            <span class="pagination-label">
                { format!("Página {} de {}", page, pages) }
            </span>
            <button class="pagination-next" disabled={page >= pages} onclick={next}>
                {"Siguiente"}
            </button>
        </div>
    }
}
