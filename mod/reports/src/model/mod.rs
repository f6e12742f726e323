mod report;

pub use report::{
    AnalysisRequest, OutputFormat, Recommendation, RecommendationRequest, Report, ReportRef,
};
