use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Get list of deck names
    pub async fn deck_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("deckNames", json!({})).await?;
        response.into_result()
    }

    /// Note ids matching a search query, e.g. `deck:"Mining"`
    pub async fn find_notes(&self, query: &str) -> Result<Vec<u64>> {
        let response: AnkiResponse<Vec<u64>> =
            self.invoke("findNotes", json!({ "query": query })).await?;
        response.into_result()
    }

    /// Fields and note type of the given notes
    pub async fn notes_info(&self, ids: &[u64]) -> Result<Vec<NoteInfo>> {
        let response: AnkiResponse<Vec<NoteInfo>> =
            self.invoke("notesInfo", json!({ "notes": ids })).await?;
        response.into_result()
    }

    /// Overwrite the named fields of one note
    pub async fn update_note_fields(
        &self,
        id: u64,
        fields: &BTreeMap<String, String>,
    ) -> Result<()> {
        let params = json!({
            "note": {
                "id": id,
                "fields": fields,
            }
        });

        let response: AnkiResponse<serde_json::Value> =
            self.invoke("updateNoteFields", params).await?;
        response.into_unit()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    pub note_id: u64,
    pub fields: BTreeMap<String, FieldInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldInfo {
    pub value: String,
    pub order: u32,
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result
            .context("AnkiConnect returned null result")
    }

    /// For actions whose success result is `null`
    fn into_unit(self) -> Result<()> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_wins() {
        let response: AnkiResponse<Vec<u64>> =
            serde_json::from_str(r#"{ "result": null, "error": "deck was not found" }"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("deck was not found"));
    }

    #[test]
    fn test_null_result_is_error_unless_unit() {
        let response: AnkiResponse<Vec<u64>> =
            serde_json::from_str(r#"{ "result": null, "error": null }"#).unwrap();
        assert!(response.into_result().is_err());

        let response: AnkiResponse<serde_json::Value> =
            serde_json::from_str(r#"{ "result": null, "error": null }"#).unwrap();
        assert!(response.into_unit().is_ok());
    }

    #[test]
    fn test_notes_info_shape() {
        let response: AnkiResponse<Vec<NoteInfo>> = serde_json::from_str(
            r#"{
                "result": [{
                    "noteId": 1502298033753,
                    "modelName": "Japanese",
                    "tags": ["mining"],
                    "fields": {
                        "KanjiInfo": { "value": "", "order": 1 },
                        "Expression": { "value": "日本", "order": 0 }
                    }
                }],
                "error": null
            }"#,
        )
        .unwrap();

        let notes = response.into_result().unwrap();
        assert_eq!(notes[0].note_id, 1502298033753);
        assert_eq!(notes[0].fields["Expression"].value, "日本");
        assert_eq!(notes[0].fields["KanjiInfo"].order, 1);
    }

    #[test]
    fn test_request_serialization() {
        let request = AnkiRequest {
            action: "findNotes".to_string(),
            version: 6,
            params: json!({ "query": "deck:\"Mining\"" }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["action"], "findNotes");
        assert_eq!(value["version"], 6);
        assert_eq!(value["params"]["query"], "deck:\"Mining\"");
    }
}
