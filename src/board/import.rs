use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::{ApplicationCard, ApplicationId};

/// Errors raised while importing cards from an export instead of markup.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid card CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid card JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read cards from a CSV export with `Id`, `Organization`, `Solution`, and
/// `Skills` columns. A blank id degrades to the "N/A" sentinel, matching the
/// markup scrape.
pub fn cards_from_csv<R: Read>(reader: R) -> Result<Vec<ApplicationCard>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut cards = Vec::new();

    for row in csv_reader.deserialize::<CardRow>() {
        let row = row?;
        cards.push(ApplicationCard {
            id: row
                .id
                .map(ApplicationId)
                .unwrap_or_else(ApplicationId::not_available),
            organization_name: row.organization_name,
            solution_name: row.solution_name,
            skills_text: row.skills_text,
        });
    }

    Ok(cards)
}

/// Read cards from a JSON array, the shape the board template embeds as its
/// `application_json` payload.
pub fn cards_from_json(payload: &str) -> Result<Vec<ApplicationCard>, ImportError> {
    Ok(serde_json::from_str(payload)?)
}

#[derive(Debug, Deserialize)]
struct CardRow {
    #[serde(rename = "Id", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Organization", default)]
    organization_name: String,
    #[serde(rename = "Solution", default)]
    solution_name: String,
    #[serde(rename = "Skills", default)]
    skills_text: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
