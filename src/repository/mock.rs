//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::tool::Tool;
use crate::domain::types::ToolSlug;
use crate::repository::ToolReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub ToolRepository {}

    impl ToolReader for ToolRepository {
        fn list_tools(&self) -> RepositoryResult<Vec<Tool>>;
        fn get_tool_by_slug(&self, slug: &ToolSlug) -> RepositoryResult<Option<Tool>>;
    }
}
