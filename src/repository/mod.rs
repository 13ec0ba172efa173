//! Item sources behind the catalog and admin pages.
//!
//! Tools come from a static in-crate table; connections and users are read
//! from (and deleted through) the external admin API.

use std::future::Future;

use crate::domain::connection::Connection;
use crate::domain::tool::Tool;
use crate::domain::types::{ConnectionId, ToolSlug};
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;

pub mod api;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod tool;

pub use api::ApiRepository;
pub use tool::StaticToolRepository;

pub trait ToolReader {
    fn list_tools(&self) -> RepositoryResult<Vec<Tool>>;
    fn get_tool_by_slug(&self, slug: &ToolSlug) -> RepositoryResult<Option<Tool>>;
}

pub trait ConnectionReader {
    fn list_connections(&self) -> impl Future<Output = RepositoryResult<Vec<Connection>>>;
}

pub trait ConnectionWriter {
    fn delete_connection(&self, id: &ConnectionId) -> impl Future<Output = RepositoryResult<()>>;
}

pub trait UserReader {
    fn list_users(&self) -> impl Future<Output = RepositoryResult<Vec<User>>>;
}
