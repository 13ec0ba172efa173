//! Services for the admin users table.

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::session::SessionUser;
use crate::domain::user::User;
use crate::domain::view::{CatalogAction, CatalogView};
use crate::dto::ListQuery;
use crate::dto::admin::UsersPageData;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::UserReader;
use crate::services::{ServiceResult, ensure_role};

pub async fn load_users_page<R>(
    repo: &R,
    user: &SessionUser,
    query: &ListQuery,
) -> ServiceResult<UsersPageData>
where
    R: UserReader + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let mut view: CatalogView<User> = CatalogView::loading(DEFAULT_ITEMS_PER_PAGE);
    match repo.list_users().await {
        Ok(users) => view.dispatch(CatalogAction::Loaded(users)),
        Err(err) => {
            log::error!("Failed to load users: {err}");
            view.dispatch(CatalogAction::LoadFailed(err.to_string()));
        }
    }
    view.apply(query.filter_state(), query.page_or_first());

    Ok(UsersPageData {
        users: view.window(),
        filter: view.filter().clone(),
        roles: view.categories(),
        load: view.load_state().clone(),
    })
}
