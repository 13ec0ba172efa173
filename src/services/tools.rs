//! Services behind the individual tool pages and the run API.

use crate::domain::tool::{Tool, ToolKind};
use crate::domain::types::ToolSlug;
use crate::dto::tools::ToolPageData;
use crate::forms::tools::ToolForm;
use crate::repository::ToolReader;
use crate::services::{ServiceError, ServiceResult};
use crate::tools::{self, ToolError, ToolOutcome, ToolRequest};

fn find_tool<R>(repo: &R, slug: &str) -> ServiceResult<Tool>
where
    R: ToolReader + ?Sized,
{
    // A malformed slug can never name a tool.
    let slug = ToolSlug::new(slug).map_err(|_| ServiceError::NotFound)?;
    repo.get_tool_by_slug(&slug)?.ok_or(ServiceError::NotFound)
}

fn page_data(tool: Tool, form: ToolForm, outcome: Option<ToolOutcome>) -> ToolPageData {
    let units = match tool.kind {
        ToolKind::UnitConverter(dimension) => dimension.units().to_vec(),
        _ => Vec::new(),
    };
    ToolPageData {
        tool,
        form,
        outcome,
        units,
    }
}

/// Loads a tool page with an empty form.
pub fn load_tool_page<R>(repo: &R, slug: &str) -> ServiceResult<ToolPageData>
where
    R: ToolReader + ?Sized,
{
    let tool = find_tool(repo, slug)?;
    Ok(page_data(tool, ToolForm::default(), None))
}

/// Runs the tool with the submitted form and keeps the form for redisplay.
///
/// A form that cannot be turned into a request is reported in the result
/// panel like any other invalid input.
pub fn run_tool<R>(repo: &R, slug: &str, form: ToolForm) -> ServiceResult<ToolPageData>
where
    R: ToolReader + ?Sized,
{
    let tool = find_tool(repo, slug)?;

    let outcome = match form.clone().into_request(tool.kind) {
        Ok(request) => tools::run(&request),
        Err(err) => {
            log::warn!("Rejected {} form: {err}", tool.slug);
            ToolOutcome::from(Err(ToolError::InvalidInput))
        }
    };

    Ok(page_data(tool, form, Some(outcome)))
}

/// Runs a JSON tool request.
pub fn run_request(request: &ToolRequest) -> ToolOutcome {
    let outcome = tools::run(request);
    if outcome.is_error {
        log::debug!("Tool run failed: {}", outcome.output);
    }
    outcome
}
