use prato_core::now_rfc3339;
use prato_genai::TextGenerator;
use prato_pdf::{Document, DocumentRenderer};
use prato_sql::{Row, SQLStore, Value};

use crate::model::{Recommendation, Report, ReportRef};
use crate::service::{prompt, ReportsError, ReportsService};

const ANALYSIS_REVIEW_LIMIT: u32 = 50;
const RECOMMENDATION_REVIEW_LIMIT: u32 = 100;
const HISTORY_LIMIT: u32 = 10;

pub const ANALYSIS_TITLE: &str = "Business Analysis Report";
pub const RECOMMENDATION_TITLE: &str = "Recommendation Report";

impl ReportsService {
    /// Generate and persist a business-analysis report for the restaurant.
    ///
    /// Zero reviews is valid input; the generator sees an empty review
    /// list. A generation failure is terminal and nothing is stored.
    pub async fn business_analysis(&self, restaurant_id: i64) -> Result<Report, ReportsError> {
        let reviews = self.recent_reviews(restaurant_id, ANALYSIS_REVIEW_LIMIT)?;
        let prompt = prompt::business_analysis(&reviews);
        let analysis = self.generator.generate(&prompt).await?;

        let created_at = now_rfc3339();
        let id = self.sql.insert(
            "INSERT INTO reports (restaurant_id, analysis, created_at) VALUES (?1, ?2, ?3)",
            &[
                Value::Integer(restaurant_id),
                Value::Text(analysis.clone()),
                Value::Text(created_at.clone()),
            ],
        )?;
        tracing::info!(restaurant_id, report_id = id, "business analysis generated");

        Ok(Report {
            id,
            restaurant_id,
            analysis,
            created_at,
        })
    }

    /// Generate a recommendation for a client about one restaurant.
    /// Never persisted.
    pub async fn recommendation(
        &self,
        client_id: i64,
        restaurant_id: i64,
    ) -> Result<Recommendation, ReportsError> {
        let restaurant_tags = self.restaurant_tags(restaurant_id)?;
        let client_tags = self.client_tags(client_id)?;
        let reviews = self.recent_reviews(restaurant_id, RECOMMENDATION_REVIEW_LIMIT)?;
        let prompt = prompt::recommendation(&reviews, &restaurant_tags, &client_tags);
        let analysis = self.generator.generate(&prompt).await?;

        Ok(Recommendation {
            restaurant_id,
            analysis,
            created_at: now_rfc3339(),
        })
    }

    /// The restaurant's most recent persisted reports, newest first.
    pub fn history(&self, restaurant_id: i64) -> Result<Vec<ReportRef>, ReportsError> {
        let rows = self.sql.query(
            &format!(
                "SELECT id, created_at FROM reports WHERE restaurant_id = ?1
                 ORDER BY created_at DESC, id DESC LIMIT {}",
                HISTORY_LIMIT
            ),
            &[Value::Integer(restaurant_id)],
        )?;
        rows.iter()
            .map(|row| {
                Ok(ReportRef {
                    id: row
                        .get_i64("id")
                        .ok_or_else(|| ReportsError::Internal("missing id column".into()))?,
                    date: row
                        .get_str("created_at")
                        .ok_or_else(|| ReportsError::Internal("missing created_at column".into()))?
                        .to_string(),
                })
            })
            .collect()
    }

    /// Fetch one persisted report, scoped to its owning restaurant. A
    /// report belonging to another restaurant reads as absent.
    pub fn get_report(&self, report_id: i64, restaurant_id: i64) -> Result<Report, ReportsError> {
        let rows = self.sql.query(
            "SELECT id, restaurant_id, analysis, created_at FROM reports
             WHERE id = ?1 AND restaurant_id = ?2",
            &[Value::Integer(report_id), Value::Integer(restaurant_id)],
        )?;
        let row = rows.first().ok_or(ReportsError::ReportNotFound)?;
        report_from_row(row)
    }

    /// Render report text as a PDF document. The generation timestamp is
    /// part of the document, so re-rendering a stored report reproduces
    /// the original bytes.
    pub fn render(
        &self,
        title: &str,
        restaurant_id: i64,
        created_at: &str,
        body: &str,
    ) -> Result<Vec<u8>, ReportsError> {
        let doc = Document {
            title: title.to_string(),
            fields: vec![
                ("Restaurant ID".to_string(), restaurant_id.to_string()),
                ("Generated at".to_string(), created_at.to_string()),
            ],
            body: body.to_string(),
        };
        Ok(self.renderer.render(&doc)?)
    }
}

fn report_from_row(row: &Row) -> Result<Report, ReportsError> {
    let column = |name: &str| ReportsError::Internal(format!("missing {} column", name));
    Ok(Report {
        id: row.get_i64("id").ok_or_else(|| column("id"))?,
        restaurant_id: row
            .get_i64("restaurant_id")
            .ok_or_else(|| column("restaurant_id"))?,
        analysis: row
            .get_str("analysis")
            .ok_or_else(|| column("analysis"))?
            .to_string(),
        created_at: row
            .get_str("created_at")
            .ok_or_else(|| column("created_at"))?
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use prato_genai::FailingGenerator;
    use prato_sql::{SQLStore, Value};

    use super::ANALYSIS_TITLE;
    use crate::service::testutil::{
        fixed_service, seed_client, seed_restaurant, seed_review, service,
    };
    use crate::service::ReportsError;

    #[tokio::test]
    async fn analysis_persists_exactly_one_row() {
        let (svc, sql, responder) = fixed_service("Looking good");
        let id = seed_restaurant(&sql, "Casa Mia", &[]);
        seed_review(&sql, id, "Ana", 5, Some("Great"), "2026-03-01T10:00:00+00:00");

        let report = svc.business_analysis(id).await.unwrap();
        assert_eq!(report.analysis, "Looking good");

        let rows = sql
            .query("SELECT id FROM reports WHERE restaurant_id = ?1", &[Value::Integer(id)])
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(responder.prompts()[0].contains("Review 1: \"Great\" (5 stars)"));
    }

    #[tokio::test]
    async fn analysis_with_zero_reviews_still_succeeds() {
        let (svc, sql, responder) = fixed_service("Nothing to report");
        let id = seed_restaurant(&sql, "Quiet Corner", &[]);

        let report = svc.business_analysis(id).await.unwrap();
        assert_eq!(report.analysis, "Nothing to report");
        assert_eq!(svc.history(id).unwrap().len(), 1);
        assert!(responder.prompts()[0].ends_with("The reviews follow:\n"));
    }

    #[tokio::test]
    async fn generation_failure_persists_nothing() {
        let (svc, sql) = service(Arc::new(FailingGenerator));
        let id = seed_restaurant(&sql, "Casa Mia", &[]);

        let err = svc.business_analysis(id).await.unwrap_err();
        assert!(matches!(err, ReportsError::Upstream(_)));
        assert!(svc.history(id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn recommendation_is_not_persisted() {
        let (svc, sql, responder) = fixed_service("Recommended: yes");
        let restaurant = seed_restaurant(&sql, "Casa Mia", &["italian"]);
        let client = seed_client(&sql, "ana@example.com", &["vegan"]);
        seed_review(&sql, restaurant, "Bo", 4, None, "2026-03-01T10:00:00+00:00");

        let rec = svc.recommendation(client, restaurant).await.unwrap();
        assert_eq!(rec.analysis, "Recommended: yes");
        assert!(svc.history(restaurant).unwrap().is_empty());

        let prompt = &responder.prompts()[0];
        assert!(prompt.contains("restaurant's tags (italian)"));
        assert!(prompt.contains("client's tags (vegan)"));
        assert!(prompt.contains("Bo (4 stars): \"No comment\""));
    }

    #[tokio::test]
    async fn recommendation_for_unknown_restaurant_is_not_found() {
        let (svc, sql, _responder) = fixed_service("irrelevant");
        let client = seed_client(&sql, "ana@example.com", &[]);

        let err = svc.recommendation(client, 99).await.unwrap_err();
        assert!(matches!(err, ReportsError::RestaurantNotFound));
    }

    #[tokio::test]
    async fn history_caps_at_ten_newest_first() {
        let (svc, sql, _responder) = fixed_service("report");
        let id = seed_restaurant(&sql, "Casa Mia", &[]);
        for i in 0..12 {
            sql.insert(
                "INSERT INTO reports (restaurant_id, analysis, created_at) VALUES (?1, ?2, ?3)",
                &[
                    Value::Integer(id),
                    Value::Text(format!("report {}", i)),
                    Value::Text(format!("2026-03-{:02}T10:00:00+00:00", i + 1)),
                ],
            )
            .unwrap();
        }

        let history = svc.history(id).unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0].date, "2026-03-12T10:00:00+00:00");
    }

    #[tokio::test]
    async fn foreign_report_reads_as_absent() {
        let (svc, sql, _responder) = fixed_service("mine");
        let a = seed_restaurant(&sql, "Alpha", &[]);
        let b = seed_restaurant(&sql, "Beta", &[]);
        let report = svc.business_analysis(a).await.unwrap();

        assert!(svc.get_report(report.id, a).is_ok());
        let err = svc.get_report(report.id, b).unwrap_err();
        assert!(matches!(err, ReportsError::ReportNotFound));
    }

    #[tokio::test]
    async fn re_render_of_stored_report_is_byte_identical() {
        let (svc, sql, _responder) = fixed_service("Stable text");
        let id = seed_restaurant(&sql, "Casa Mia", &[]);
        let report = svc.business_analysis(id).await.unwrap();

        let stored = svc.get_report(report.id, id).unwrap();
        let first = svc
            .render(ANALYSIS_TITLE, id, &stored.created_at, &stored.analysis)
            .unwrap();
        let second = svc
            .render(ANALYSIS_TITLE, id, &stored.created_at, &stored.analysis)
            .unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with(b"%PDF-1.4"));
    }
}
