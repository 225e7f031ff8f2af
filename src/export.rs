// Serialization of an AnalysisResult to JSON and CSV.
use crate::lexicon::Lexicon;
use crate::model::{AnalysisResult, ExportError};

/// Pretty JSON with the `sentences` / `valence_rolling` / `emotions_rolling` /
/// `summary` shape.
pub fn to_json(result: &AnalysisResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One row per sentence; emotion columns follow lexicon order.
pub fn to_csv(result: &AnalysisResult, lexicon: &Lexicon) -> Result<String, ExportError> {
    let emotions: Vec<&str> = lexicon.emotion_names().collect();
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![
        "sent_index".to_string(),
        "valence_raw".to_string(),
        "valence_rolling".to_string(),
    ];
    header.extend(emotions.iter().map(|name| format!("{name}_rolling")));
    writer.write_record(&header)?;

    for (i, sentence) in result.sentences.iter().enumerate() {
        let rolling = result.valence_rolling.get(i).copied().unwrap_or_default();
        let mut record = vec![
            sentence.index.to_string(),
            sentence.valence_raw.to_string(),
            format!("{rolling:.3}"),
        ];
        record.extend(emotions.iter().map(|name| {
            let value = result
                .emotions_rolling
                .get(*name)
                .and_then(|series| series.get(i))
                .copied()
                .unwrap_or_default();
            format!("{value:.3}")
        }));
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
