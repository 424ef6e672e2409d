//! What a result renders as, independent of any terminal layout.

use crate::backend::{AnalysisResult, SentimentTriple};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Local,
    Gemini,
}

impl Provider {
    pub fn title(self) -> &'static str {
        match self {
            Provider::Local => "Local Model Sentiment",
            Provider::Gemini => "Gemini Model Sentiment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    pub provider: Provider,
    pub overall: Option<String>,
    /// The server sent no overall label; `overall` is the largest share.
    pub overall_derived: bool,
    pub triple: SentimentTriple,
}

impl ChartSection {
    fn new(provider: Provider, overall: Option<&str>, triple: SentimentTriple) -> Self {
        match overall.filter(|label| !label.is_empty()) {
            Some(label) => Self {
                provider,
                overall: Some(label.to_string()),
                overall_derived: false,
                triple,
            },
            None => Self {
                provider,
                overall: triple.dominant().map(|c| c.label().to_string()),
                overall_derived: true,
                triple,
            },
        }
    }

    pub fn overall_label(&self) -> Option<String> {
        let overall = self.overall.as_ref()?;
        if self.overall_derived {
            Some(format!("Overall: {} (by share)", overall))
        } else {
            Some(format!("Overall: {}", overall))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub text: String,
    pub sections: Vec<ChartSection>,
    pub notice: Option<String>,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let mut sections = Vec::with_capacity(2);

        if let Some(triple) = result.local_sentiment {
            sections.push(ChartSection::new(
                Provider::Local,
                result.local_overall_sentiment.as_deref(),
                triple,
            ));
        }

        let mut notice = None;
        if let Some(gemini) = &result.gemini_sentiment {
            // An empty error string is no error
            let error = gemini.error.as_deref().filter(|e| !e.is_empty());
            match (error, gemini.text_sentiment) {
                (Some(error), _) => {
                    notice = Some(format!("Gemini Analysis Unavailable: {}", error));
                }
                (None, Some(triple)) => sections.push(ChartSection::new(
                    Provider::Gemini,
                    result.gemini_overall_sentiment.as_deref(),
                    triple,
                )),
                (None, None) => {}
            }
        }

        Self {
            text: result.text.clone(),
            sections,
            notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GeminiSentiment;

    fn local_only() -> AnalysisResult {
        AnalysisResult {
            text: "great product!".to_string(),
            local_sentiment: Some(SentimentTriple::new(0.8, 0.15, 0.05)),
            local_overall_sentiment: Some("Positive".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_local_only_renders_one_section() {
        let view = ResultView::from_result(&local_only());

        assert_eq!(view.sections.len(), 1);
        let section = &view.sections[0];
        assert_eq!(section.provider, Provider::Local);
        assert_eq!(section.overall_label().as_deref(), Some("Overall: Positive"));
        assert!(!section.overall_derived);
        let values: Vec<f64> = section.triple.slices().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0.8, 0.15, 0.05]);
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_both_providers_render_two_sections() {
        let mut result = local_only();
        result.gemini_sentiment = Some(GeminiSentiment {
            text_sentiment: Some(SentimentTriple::new(10.0, 30.0, 60.0)),
            error: None,
        });
        result.gemini_overall_sentiment = Some("Negative".to_string());

        let view = ResultView::from_result(&result);

        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[1].provider, Provider::Gemini);
        assert_eq!(view.sections[1].overall.as_deref(), Some("Negative"));
    }

    #[test]
    fn test_gemini_error_shows_notice_and_keeps_local() {
        let mut result = local_only();
        result.gemini_sentiment = Some(GeminiSentiment {
            text_sentiment: Some(SentimentTriple::new(10.0, 30.0, 60.0)),
            error: Some("Gemini prediction failed: quota".to_string()),
        });

        let view = ResultView::from_result(&result);

        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].provider, Provider::Local);
        assert_eq!(
            view.notice.as_deref(),
            Some("Gemini Analysis Unavailable: Gemini prediction failed: quota")
        );
    }

    #[test]
    fn test_missing_overall_falls_back_to_dominant() {
        let result = AnalysisResult {
            text: "ugh".to_string(),
            local_sentiment: Some(SentimentTriple::new(5.0, 15.0, 80.0)),
            ..Default::default()
        };

        let view = ResultView::from_result(&result);

        let section = &view.sections[0];
        assert_eq!(section.overall.as_deref(), Some("Negative"));
        assert!(section.overall_derived);
        assert_eq!(section.overall_label().as_deref(), Some("Overall: Negative (by share)"));
    }

    #[test]
    fn test_empty_gemini_error_still_draws_chart() {
        let mut result = local_only();
        result.gemini_sentiment = Some(GeminiSentiment {
            text_sentiment: Some(SentimentTriple::new(10.0, 30.0, 60.0)),
            error: Some(String::new()),
        });

        let view = ResultView::from_result(&result);

        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[1].provider, Provider::Gemini);
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_empty_result_has_no_sections() {
        let view = ResultView::from_result(&AnalysisResult::default());
        assert!(view.sections.is_empty());
        assert!(view.notice.is_none());
    }
}
