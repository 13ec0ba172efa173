//! DTOs used by the admin dashboard pages.

use serde::Serialize;

use crate::domain::connection::Connection;
use crate::domain::filter::FilterState;
use crate::domain::tool::ToolEntry;
use crate::domain::user::User;
use crate::domain::view::LoadState;
use crate::pagination::Paginated;

/// Data required to render the connections table.
#[derive(Debug, Serialize)]
pub struct ConnectionsPageData {
    pub connections: Paginated<Connection>,
    pub filter: FilterState,
    pub services: Vec<String>,
    /// `Failed` when the API could not be reached; the table is then empty.
    pub load: LoadState,
}

/// Data required to render the users table.
#[derive(Debug, Serialize)]
pub struct UsersPageData {
    pub users: Paginated<User>,
    pub filter: FilterState,
    pub roles: Vec<String>,
    pub load: LoadState,
}

/// Data required to render the admin tools table.
#[derive(Debug, Serialize)]
pub struct AdminToolsPageData {
    pub tools: Paginated<ToolEntry>,
    pub filter: FilterState,
    pub categories: Vec<String>,
}
