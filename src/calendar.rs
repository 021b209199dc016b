//! Contribution calendar input
//!
//! A calendar is a list of weeks (columns), each holding up to seven days
//! (rows). Missing days are an explicit `None`, never a sentinel colour.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::DAYS_PER_WEEK;

/// Activity for a single calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    /// Colour reported by the provider (light theme)
    pub color: String,
    /// Number of contributions made that day
    pub contribution_count: u32,
}

impl ContributionDay {
    pub fn new(color: impl Into<String>, contribution_count: u32) -> Self {
        Self {
            color: color.into(),
            contribution_count,
        }
    }

    /// True if anything was contributed that day
    #[inline]
    pub fn has_activity(&self) -> bool {
        self.contribution_count > 0
    }
}

/// Weeks x days grid of optional contribution data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calendar {
    pub weeks: Vec<Vec<Option<ContributionDay>>>,
}

impl Calendar {
    /// Build a calendar, rejecting weeks longer than seven days
    pub fn new(weeks: Vec<Vec<Option<ContributionDay>>>) -> Result<Self> {
        if let Some((i, week)) = weeks
            .iter()
            .enumerate()
            .find(|(_, w)| w.len() > DAYS_PER_WEEK)
        {
            return Err(Error::InvalidCalendar(format!(
                "week {} has {} days",
                i,
                week.len()
            )));
        }
        Ok(Self { weeks })
    }

    /// Number of week columns
    #[inline]
    pub fn columns(&self) -> usize {
        self.weeks.len()
    }

    /// Day at (column, row), `None` for missing or out-of-range cells
    pub fn day(&self, column: usize, row: usize) -> Option<&ContributionDay> {
        self.weeks.get(column)?.get(row)?.as_ref()
    }

    /// Populated cells in column-major order: (column, row, day)
    pub fn populated(&self) -> impl Iterator<Item = (usize, usize, &ContributionDay)> {
        (0..self.columns()).flat_map(move |c| {
            (0..DAYS_PER_WEEK).filter_map(move |r| self.day(c, r).map(|d| (c, r, d)))
        })
    }

    /// Parse either a bare weeks array or a GraphQL `contributionCalendar` response
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: CalendarDocument = serde_json::from_str(json)?;
        doc.into_calendar()
    }
}

/// Accepted JSON shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum CalendarDocument {
    Grid(Vec<Vec<Option<ContributionDay>>>),
    Weeks(WeeksEnvelope),
    Response(GraphQlResponse),
}

#[derive(Deserialize)]
struct WeeksEnvelope {
    weeks: Vec<GraphQlWeek>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlWeek {
    contribution_days: Vec<Option<ContributionDay>>,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<GraphQlData>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GraphQlData {
    user: Option<GraphQlUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlUser {
    contributions_collection: GraphQlCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlCollection {
    contribution_calendar: WeeksEnvelope,
}

impl WeeksEnvelope {
    fn into_grid(self) -> Vec<Vec<Option<ContributionDay>>> {
        self.weeks.into_iter().map(|w| w.contribution_days).collect()
    }
}

impl CalendarDocument {
    fn into_calendar(self) -> Result<Calendar> {
        match self {
            CalendarDocument::Grid(weeks) => Calendar::new(weeks),
            CalendarDocument::Weeks(envelope) => Calendar::new(envelope.into_grid()),
            CalendarDocument::Response(response) => {
                if let Some(errors) = response.errors {
                    return Err(Error::InvalidCalendar(format!("GraphQL errors: {}", errors)));
                }
                let user = response
                    .data
                    .and_then(|d| d.user)
                    .ok_or_else(|| Error::InvalidCalendar("response has no user".to_string()))?;
                Calendar::new(
                    user.contributions_collection
                        .contribution_calendar
                        .into_grid(),
                )
            }
        }
    }
}

/// Something that can hand over a finished calendar
pub trait CalendarSource {
    fn load(&self) -> Result<Calendar>;
}

/// Reads a calendar from a JSON file, or stdin for `-`
#[derive(Debug, Clone)]
pub struct JsonCalendarSource {
    path: PathBuf,
}

impl JsonCalendarSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_to_string(&self) -> Result<String> {
        if self.path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            Ok(std::fs::read_to_string(&self.path)?)
        }
    }
}

impl CalendarSource for JsonCalendarSource {
    fn load(&self) -> Result<Calendar> {
        let json = self.read_to_string()?;
        let calendar = Calendar::from_json(&json)?;
        log::debug!(
            "Loaded {} weeks from {}",
            calendar.columns(),
            self.path.display()
        );
        Ok(calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_grid() {
        let json = r##"[
            [{"color": "#ebedf0", "contributionCount": 0}, null],
            [{"color": "#216e39", "contributionCount": 12}]
        ]"##;
        let calendar = Calendar::from_json(json).unwrap();

        assert_eq!(calendar.columns(), 2);
        assert_eq!(calendar.day(0, 1), None);
        assert_eq!(calendar.day(1, 0), Some(&ContributionDay::new("#216e39", 12)));
        assert_eq!(calendar.day(5, 0), None);
    }

    #[test]
    fn test_parse_graphql_response() {
        let json = r##"{"data": {"user": {"contributionsCollection": {"contributionCalendar": {
            "weeks": [
                {"contributionDays": [{"color": "#9be9a8", "contributionCount": 2}]},
                {"contributionDays": [{"color": "#ebedf0", "contributionCount": 0},
                                      {"color": "#40c463", "contributionCount": 5}]}
            ]
        }}}}}"##;
        let calendar = Calendar::from_json(json).unwrap();

        assert_eq!(calendar.columns(), 2);
        assert_eq!(calendar.populated().count(), 3);
        assert!(calendar.day(1, 1).unwrap().has_activity());
    }

    #[test]
    fn test_graphql_errors_are_reported() {
        let json = r#"{"errors": [{"message": "Could not resolve to a User"}]}"#;
        let err = Calendar::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidCalendar(_)));
    }

    #[test]
    fn test_rejects_long_week() {
        let week = vec![Some(ContributionDay::new("#ebedf0", 0)); 8];
        assert!(Calendar::new(vec![week]).is_err());
    }

    #[test]
    fn test_populated_is_column_major_and_skips_missing() {
        let day = |n| Some(ContributionDay::new("#ebedf0", n));
        let calendar = Calendar::new(vec![vec![day(0), None, day(1)], vec![None, day(2)]]).unwrap();

        let cells: Vec<_> = calendar
            .populated()
            .map(|(c, r, d)| (c, r, d.contribution_count))
            .collect();
        assert_eq!(cells, vec![(0, 0, 0), (0, 2, 1), (1, 1, 2)]);
    }
}
