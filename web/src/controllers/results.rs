use serde_json::Value;
use shared_types::{error_flag, AiResult, ChartData};

use crate::{
    errors::ResultsError,
    storage::{KeyValueStore, SessionStore},
};

pub const NO_SUITABLE_DAY: &str = "No suitable day found";
pub const INDOOR_SUGGESTION: &str =
    "No suitable day found for your activity. Consider indoor activities.";
pub const NO_ALTERNATIVES: &str = "No alternative days available";

/// The stored document alongside its typed reading.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResult {
    pub document: Value,
    pub result: AiResult,
}

pub fn load_result<S: KeyValueStore>(store: &SessionStore<S>) -> Result<LoadedResult, ResultsError> {
    let raw = store.ai_result_raw().ok_or(ResultsError::Missing)?;
    let document: Value = serde_json::from_str(&raw)?;
    if document.is_null() {
        return Err(ResultsError::Missing);
    }
    if let Some(message) = error_flag(&document) {
        return Err(ResultsError::Reported(message));
    }

    let result = AiResult::from_value(document.clone())?;
    Ok(LoadedResult { document, result })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationList {
    Items(Vec<String>),
    IndoorSuggestion,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlternativeList {
    Days(Vec<String>),
    NoneAvailable,
}

/// Everything the results page shows, derived from one result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub summary: Vec<SummaryLine>,
    pub recommendations: RecommendationList,
    pub alternatives: AlternativeList,
    pub chart: ChartData,
}

impl ResultsView {
    pub fn from_result(result: &AiResult) -> Self {
        Self {
            summary: summary_lines(result),
            recommendations: recommendations_for(result),
            alternatives: alternatives_for(result),
            chart: result.chart_data.clone(),
        }
    }

    pub fn summary_text(&self) -> String {
        self.summary
            .iter()
            .map(|line| format!("{}: {}", line.label, line.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn best_day(result: &AiResult) -> Option<&str> {
    result.best_day.as_deref().filter(|day| !day.is_empty())
}

fn summary_lines(result: &AiResult) -> Vec<SummaryLine> {
    let mut lines = vec![
        SummaryLine {
            label: "Activity",
            value: result.activity.clone(),
        },
        SummaryLine {
            label: "Best Day",
            value: best_day(result).unwrap_or(NO_SUITABLE_DAY).to_string(),
        },
        SummaryLine {
            label: "Date Range Checked",
            value: format!("{} to {}", result.start_date, result.end_date),
        },
    ];

    if let Some(city) = result.nearest_better_city.as_ref().filter(|c| !c.is_empty()) {
        lines.push(SummaryLine {
            label: "Better nearby city",
            value: city.clone(),
        });
    }

    lines
}

fn recommendations_for(result: &AiResult) -> RecommendationList {
    let Some(best_day) = best_day(result) else {
        return RecommendationList::IndoorSuggestion;
    };

    let days = &result.daily_weather;
    let flagged = days
        .iter()
        .find(|day| day.suitable && !day.recommendations.is_empty());

    // Backends that never set `suitable` still date their records.
    let source = match flagged {
        Some(day) => Some(day),
        None if !days.iter().any(|day| day.suitable) => days
            .iter()
            .find(|day| day.date.as_deref() == Some(best_day)),
        None => None,
    };

    RecommendationList::Items(
        source
            .map(|day| day.recommendations.clone())
            .unwrap_or_default(),
    )
}

fn alternatives_for(result: &AiResult) -> AlternativeList {
    if result.alternative_days.is_empty() {
        AlternativeList::NoneAvailable
    } else {
        AlternativeList::Days(result.alternative_days.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{session_store::AI_RESULT_KEY, MemoryStorage};
    use serde_json::json;

    fn hiking_document() -> Value {
        json!({
            "activity": "hiking",
            "best_day": "2024-06-02",
            "start_date": "2024-06-01",
            "end_date": "2024-06-03",
            "daily_weather": [{
                "T2M": 22, "PRECTOT": 0, "WS10M": 3, "air_quality": 1,
                "suitable": true, "recommendations": ["bring water"]
            }],
            "alternative_days": ["2024-06-03"],
            "chart_data": {
                "labels": ["06-01", "06-02", "06-03"],
                "temperature": [20, 22, 21],
                "rain": [1, 0, 2],
                "wind": [4, 3, 5],
                "air_quality": [2, 1, 2]
            }
        })
    }

    fn store_with(raw: &str) -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new().with_item(AI_RESULT_KEY, raw))
    }

    #[test]
    fn test_missing_result() {
        let store = SessionStore::new(MemoryStorage::new());
        let err = load_result(&store).unwrap_err();
        assert!(matches!(err, ResultsError::Missing));
        assert_eq!(err.user_message(), "Error fetching AI weather recommendation.");

        assert!(matches!(
            load_result(&store_with("null")),
            Err(ResultsError::Missing)
        ));
    }

    #[test]
    fn test_error_flagged_result() {
        let err = load_result(&store_with(r#"{"error": "Server error."}"#)).unwrap_err();
        assert!(matches!(err, ResultsError::Reported(ref m) if m == "Server error."));
    }

    #[test]
    fn test_renders_hiking_result() {
        let loaded = load_result(&store_with(&hiking_document().to_string())).unwrap();
        assert_eq!(loaded.document, hiking_document());

        let view = ResultsView::from_result(&loaded.result);
        let summary = view.summary_text();
        assert!(summary.contains("hiking"));
        assert!(summary.contains("2024-06-02"));
        assert!(summary.contains("2024-06-01 to 2024-06-03"));
        assert_eq!(
            view.recommendations,
            RecommendationList::Items(vec!["bring water".to_string()])
        );
        assert_eq!(
            view.alternatives,
            AlternativeList::Days(vec!["2024-06-03".to_string()])
        );
        assert_eq!(view.chart.labels.len(), 3);
    }

    #[test]
    fn test_no_best_day_suggests_indoor_activities() {
        let mut doc = hiking_document();
        doc["best_day"] = Value::Null;
        doc["alternative_days"] = json!([]);
        let result = AiResult::from_value(doc).unwrap();
        let view = ResultsView::from_result(&result);

        assert!(view.summary_text().contains(NO_SUITABLE_DAY));
        assert_eq!(view.recommendations, RecommendationList::IndoorSuggestion);
        assert_eq!(view.alternatives, AlternativeList::NoneAvailable);
    }

    #[test]
    fn test_first_suitable_record_with_recommendations_wins() {
        let mut doc = hiking_document();
        doc["daily_weather"] = json!([
            {"T2M": 30, "PRECTOT": 4, "WS10M": 12, "air_quality": 2,
             "suitable": false, "recommendations": ["Carry umbrella"]},
            {"T2M": 21, "PRECTOT": 0, "WS10M": 2, "air_quality": 1,
             "suitable": true, "recommendations": []},
            {"T2M": 22, "PRECTOT": 0, "WS10M": 3, "air_quality": 1,
             "suitable": true, "recommendations": ["Enjoy outdoor activity"]}
        ]);
        let result = AiResult::from_value(doc).unwrap();

        assert_eq!(
            ResultsView::from_result(&result).recommendations,
            RecommendationList::Items(vec!["Enjoy outdoor activity".to_string()])
        );
    }

    #[test]
    fn test_unflagged_records_use_best_day_date() {
        let mut doc = hiking_document();
        doc["daily_weather"] = json!([
            {"date": "2024-06-01", "T2M": 19, "PRECTOT": 3, "WS10M": 4,
             "air_quality": "Good", "recommendations": ["Carry umbrella"]},
            {"date": "2024-06-02", "T2M": 22, "PRECTOT": 0, "WS10M": 3,
             "air_quality": "Good", "recommendations": ["Enjoy outdoor activity"]}
        ]);
        doc["nearest_better_city"] = json!("Alexandria");
        let result = AiResult::from_value(doc).unwrap();
        let view = ResultsView::from_result(&result);

        assert_eq!(
            view.recommendations,
            RecommendationList::Items(vec!["Enjoy outdoor activity".to_string()])
        );
        assert!(view.summary_text().contains("Better nearby city: Alexandria"));
    }

    #[test]
    fn test_misaligned_chart_is_rejected() {
        let mut doc = hiking_document();
        doc["chart_data"]["wind"] = json!([4]);
        let err = load_result(&store_with(&doc.to_string())).unwrap_err();
        assert!(matches!(err, ResultsError::Schema(_)));
    }
}
