//! Services backing the public catalog pages and the admin tools table.

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::catalog::CatalogItem;
use crate::domain::session::SessionUser;
use crate::domain::tool::ToolEntry;
use crate::domain::view::CatalogView;
use crate::dto::ListQuery;
use crate::dto::admin::AdminToolsPageData;
use crate::dto::api::ToolsResponse;
use crate::dto::catalog::{CatalogPageData, HomePageData};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::ToolReader;
use crate::services::{ServiceResult, ensure_role};

/// Cards per catalog page; the grid is three wide.
pub const TOOLS_PER_PAGE: usize = 9;

fn catalog_view<R>(repo: &R, query: &ListQuery) -> ServiceResult<CatalogView<CatalogItem>>
where
    R: ToolReader + ?Sized,
{
    let items = repo.list_tools()?.iter().map(CatalogItem::from).collect();
    let mut view = CatalogView::ready(items, TOOLS_PER_PAGE);
    view.apply(query.filter_state(), query.page_or_first());
    Ok(view)
}

/// Loads featured tools for the home page.
pub fn load_home_page<R>(repo: &R) -> ServiceResult<HomePageData>
where
    R: ToolReader + ?Sized,
{
    let tools = repo.list_tools()?;
    let view = CatalogView::ready(tools.iter().map(CatalogItem::from).collect(), TOOLS_PER_PAGE);

    Ok(HomePageData {
        featured: tools
            .iter()
            .filter(|tool| tool.featured)
            .map(CatalogItem::from)
            .collect(),
        categories: view.categories(),
        tool_count: tools.len(),
    })
}

/// Filters and pages the tool catalog according to the query string.
pub fn load_catalog_page<R>(repo: &R, query: &ListQuery) -> ServiceResult<CatalogPageData>
where
    R: ToolReader + ?Sized,
{
    let view = catalog_view(repo, query)?;

    Ok(CatalogPageData {
        tools: view.window(),
        filter: view.filter().clone(),
        categories: view.categories(),
    })
}

/// Same listing as [`load_catalog_page`] shaped for the JSON API.
pub fn load_catalog_json<R>(repo: &R, query: &ListQuery) -> ServiceResult<ToolsResponse>
where
    R: ToolReader + ?Sized,
{
    let window = catalog_view(repo, query)?.window();

    Ok(ToolsResponse {
        total: window.total_items,
        page: window.page,
        total_pages: window.total_pages,
        pages: window.pages,
        tools: window.items,
    })
}

/// Lists every tool for the admin dashboard.
pub fn load_admin_tools_page<R>(
    repo: &R,
    user: &SessionUser,
    query: &ListQuery,
) -> ServiceResult<AdminToolsPageData>
where
    R: ToolReader + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let entries = repo.list_tools()?.iter().map(ToolEntry::from).collect();
    let mut view = CatalogView::ready(entries, DEFAULT_ITEMS_PER_PAGE);
    view.apply(query.filter_state(), query.page_or_first());

    Ok(AdminToolsPageData {
        tools: view.window(),
        filter: view.filter().clone(),
        categories: view.categories(),
    })
}
