//! Services for the admin connections table.

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::connection::Connection;
use crate::domain::session::SessionUser;
use crate::domain::types::ConnectionId;
use crate::domain::view::{CatalogAction, CatalogView};
use crate::dto::ListQuery;
use crate::dto::admin::ConnectionsPageData;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::errors::RepositoryError;
use crate::repository::{ConnectionReader, ConnectionWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Fetches connections once and applies the filter from the query string.
///
/// A failed fetch is logged and yields an empty table in the `Failed` state
/// rather than an error page.
pub async fn load_connections_page<R>(
    repo: &R,
    user: &SessionUser,
    query: &ListQuery,
) -> ServiceResult<ConnectionsPageData>
where
    R: ConnectionReader + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let mut view: CatalogView<Connection> = CatalogView::loading(DEFAULT_ITEMS_PER_PAGE);
    match repo.list_connections().await {
        Ok(connections) => view.dispatch(CatalogAction::Loaded(connections)),
        Err(err) => {
            log::error!("Failed to load connections: {err}");
            view.dispatch(CatalogAction::LoadFailed(err.to_string()));
        }
    }
    view.apply(query.filter_state(), query.page_or_first());

    Ok(ConnectionsPageData {
        connections: view.window(),
        filter: view.filter().clone(),
        services: view.categories(),
        load: view.load_state().clone(),
    })
}

/// Deletes a connection through the API. Nothing is removed locally; the
/// next page load reflects the API's state.
pub async fn delete_connection<R>(repo: &R, user: &SessionUser, id: &str) -> ServiceResult<()>
where
    R: ConnectionWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let id = ConnectionId::new(id)?;

    repo.delete_connection(&id).await.map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        other => other.into(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::filter::CategoryFilter;
    use crate::domain::view::LoadState;
    use crate::repository::errors::RepositoryResult;
    use crate::services::test_support::{admin, visitor};

    #[derive(Default)]
    struct FakeApi {
        connections: Option<Vec<Connection>>,
        deleted: RefCell<Vec<String>>,
    }

    impl ConnectionReader for FakeApi {
        async fn list_connections(&self) -> RepositoryResult<Vec<Connection>> {
            self.connections
                .clone()
                .ok_or_else(|| RepositoryError::ConnectionError("Request timed out".to_string()))
        }
    }

    impl ConnectionWriter for FakeApi {
        async fn delete_connection(&self, id: &ConnectionId) -> RepositoryResult<()> {
            let exists = self
                .connections
                .iter()
                .flatten()
                .any(|c| c.id.as_str() == id.as_str());
            if !exists {
                return Err(RepositoryError::NotFound);
            }
            self.deleted.borrow_mut().push(id.to_string());
            Ok(())
        }
    }

    fn connection(n: usize, service: &str) -> Connection {
        Connection {
            id: ConnectionId::new(format!("c{n}")).unwrap(),
            name: format!("Person {n}"),
            email: format!("person{n}@example.com"),
            phone: None,
            subject: if n % 3 == 0 { "Pricing" } else { "Support" }.to_string(),
            message: "Hello".to_string(),
            service: service.to_string(),
            created_at: None,
        }
    }

    fn api(count: usize) -> FakeApi {
        FakeApi {
            connections: Some(
                (1..=count)
                    .map(|n| connection(n, if n % 2 == 0 { "Design" } else { "Hosting" }))
                    .collect(),
            ),
            ..FakeApi::default()
        }
    }

    #[actix_web::test]
    async fn lists_and_filters_connections() {
        let query = ListQuery {
            q: Some("pricing".to_string()),
            category: Some("Hosting".to_string()),
            page: None,
        };

        let data = load_connections_page(&api(30), &admin(), &query).await.unwrap();

        // Odd multiples of three up to 30: 3, 9, 15, 21, 27.
        assert_eq!(data.connections.total_items, 5);
        assert_eq!(data.filter.category, CategoryFilter::Tag("Hosting".to_string()));
        assert_eq!(data.services, vec!["Hosting", "Design"]);
        assert_eq!(data.load, LoadState::Ready);
    }

    #[actix_web::test]
    async fn fetch_failure_renders_empty_table() {
        let query = ListQuery {
            page: Some(3),
            ..ListQuery::default()
        };

        let data = load_connections_page(&FakeApi::default(), &admin(), &query)
            .await
            .unwrap();

        assert!(data.connections.items.is_empty());
        assert_eq!(data.connections.page, 1);
        assert!(matches!(data.load, LoadState::Failed(_)));
    }

    #[actix_web::test]
    async fn visitors_cannot_list_connections() {
        assert!(matches!(
            load_connections_page(&api(1), &visitor(), &ListQuery::default()).await,
            Err(ServiceError::Unauthorized)
        ));
    }

    #[actix_web::test]
    async fn deletes_through_api() {
        let repo = api(3);

        delete_connection(&repo, &admin(), "c2").await.unwrap();

        assert_eq!(*repo.deleted.borrow(), vec!["c2".to_string()]);
    }

    #[actix_web::test]
    async fn deleting_unknown_connection_is_not_found() {
        let repo = api(3);

        assert!(matches!(
            delete_connection(&repo, &admin(), "c9").await,
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            delete_connection(&repo, &admin(), "  ").await,
            Err(ServiceError::TypeConstraint(_))
        ));
        assert!(repo.deleted.borrow().is_empty());
    }
}
