//! One-shot analysis for scripts: `xsentiment --text "..."`.

use std::io::Write;

use crate::backend::{InputMode, SentimentApi};
use crate::controller::SubmissionController;
use crate::error::{Error, Result};
use crate::view::ResultView;

const BAR_WIDTH: usize = 30;

/// Analyze `value` once. The report goes to `out`, recovery hints to `diag`.
pub async fn run(
    api: &dyn SentimentApi,
    mode: InputMode,
    value: &str,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<()> {
    let mut controller = SubmissionController::new();
    controller.set_mode(mode);
    match mode {
        InputMode::Url => controller.update_url(value),
        InputMode::Text => controller.update_text(value),
    }

    let pending = controller.submit().map_err(|e| Error::Analysis(e.to_string()))?;
    let outcome = api.analyze(&pending.request).await;
    controller.resolve(pending.id, outcome);

    let state = controller.state();
    if let Some(message) = &state.error_message {
        if state.mode != mode {
            writeln!(diag, "hint: retry with --text and the tweet's contents")?;
        }
        return Err(Error::Analysis(message.clone()));
    }

    match &state.result {
        Some(result) => write_report(&ResultView::from_result(result), out),
        None => Err(Error::Analysis("empty response".to_string())),
    }
}

pub fn write_report(view: &ResultView, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Analysis Results")?;
    writeln!(out, "{}", view.text)?;

    for section in &view.sections {
        writeln!(out)?;
        writeln!(out, "{}", section.provider.title())?;
        if let Some(label) = section.overall_label() {
            writeln!(out, "  {}", label)?;
        }
        let fractions = section.triple.fractions().unwrap_or([0.0; 3]);
        for ((category, raw), share) in section.triple.slices().iter().zip(fractions.iter()) {
            let filled = (share * BAR_WIDTH as f64).round() as usize;
            writeln!(
                out,
                "  {:<9} {:<width$} {:>6.1}% ({})",
                category.label(),
                "#".repeat(filled.min(BAR_WIDTH)),
                share * 100.0,
                raw,
                width = BAR_WIDTH
            )?;
        }
    }

    if let Some(notice) = &view.notice {
        writeln!(out)?;
        writeln!(out, "{}", notice)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AnalysisResult, AnalyzeRequest, GeminiSentiment, SentimentTriple};
    use crate::error::ApiError;
    use async_trait::async_trait;

    /// Answers with the stored result, or times out when there is none.
    struct Canned(Option<AnalysisResult>);

    #[async_trait]
    impl SentimentApi for Canned {
        async fn analyze(&self, _request: &AnalyzeRequest) -> std::result::Result<AnalysisResult, ApiError> {
            self.0.clone().ok_or(ApiError::Timeout)
        }
    }

    #[tokio::test]
    async fn test_report_with_notice() {
        let api = Canned(Some(AnalysisResult {
            text: "great product!".to_string(),
            local_sentiment: Some(SentimentTriple::new(80.0, 15.0, 5.0)),
            local_overall_sentiment: Some("Positive".to_string()),
            gemini_sentiment: Some(GeminiSentiment {
                text_sentiment: None,
                error: Some("Gemini model not initialized".to_string()),
            }),
            gemini_overall_sentiment: None,
        }));
        let mut out = Vec::new();

        run(&api, InputMode::Text, "great product!", &mut out, &mut Vec::new()).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Local Model Sentiment"));
        assert!(text.contains("Overall: Positive"));
        assert!(text.contains("80.0%"));
        assert!(!text.contains("Gemini Model Sentiment"));
        assert!(text.contains("Gemini Analysis Unavailable: Gemini model not initialized"));
    }

    #[tokio::test]
    async fn test_empty_input_fails_validation() {
        let api = Canned(None);
        let mut out = Vec::new();

        let err = run(&api, InputMode::Url, "  ", &mut out, &mut Vec::new()).await.unwrap_err();

        assert_eq!(err.to_string(), "Analysis failed: Please enter a valid tweet URL");
    }

    #[tokio::test]
    async fn test_timeout_prints_hint() {
        let api = Canned(None);
        let mut out = Vec::new();
        let mut diag = Vec::new();

        let err = run(&api, InputMode::Url, "https://x.com/a/status/1", &mut out, &mut diag)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("timed out"));
        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
        assert!(String::from_utf8(diag).unwrap().starts_with("hint:"));
    }
}
