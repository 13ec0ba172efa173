use serde::Serialize;

use crate::domain::tool::Tool;
use crate::forms::tools::ToolForm;
use crate::tools::ToolOutcome;
use crate::tools::units::Unit;

/// Data required to render a single tool page.
#[derive(Debug, Serialize)]
pub struct ToolPageData {
    pub tool: Tool,
    /// Values to prefill the form with.
    pub form: ToolForm,
    /// Present after the form was submitted.
    pub outcome: Option<ToolOutcome>,
    /// Unit choices for converter tools.
    pub units: Vec<Unit>,
}
