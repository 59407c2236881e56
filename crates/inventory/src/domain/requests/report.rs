use serde::Deserialize;
use shared::utils::parse_id;
use utoipa::IntoParams;

/// Optional `?id=` filter shared by every report endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Restricts the report to a single parent record.
    pub id: Option<String>,
}

impl ReportQuery {
    /// `Ok(None)` when no filter was given, `Err(())` when it is not a valid id.
    pub fn parse(&self) -> Result<Option<i32>, ()> {
        match self.id.as_deref() {
            None => Ok(None),
            Some(raw) => parse_id(raw).map(Some).ok_or(()),
        }
    }
}
