//! [`GameApi`] over the game server's JSON HTTP interface.

use async_trait::async_trait;
use game_core::{AttributeVector, Command, CommandBatch, GameSnapshot, Position, SkillUse};
use runtime::{ApiError, GameApi};
use serde::Serialize;

const API_KEY_HEADER: &str = "X-API-KEY";

/// HTTP client for one character's API key.
pub struct HttpGameApi {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl HttpGameApi {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Sends the request and returns the body of a successful response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(ApiError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(ApiError::transport)
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn fetch_state(&self) -> Result<GameSnapshot, ApiError> {
        let body = self
            .send(self.http_client.get(self.url("/v1/game")))
            .await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn submit(&self, batch: &CommandBatch) -> Result<(), ApiError> {
        let request = self
            .http_client
            .post(self.url("/v1/commands"))
            .json(&WireBatch::from(batch));
        let body = self.send(request).await?;
        tracing::debug!("Commands accepted: {}", body);
        Ok(())
    }

    async fn respawn(&self) -> Result<(), ApiError> {
        let request = self
            .http_client
            .post(self.url("/v1/respawn"))
            .json(&serde_json::json!({}));
        self.send(request).await?;
        Ok(())
    }
}

/// Command batch in the server's request shape: one optional field per
/// command kind.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireBatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    assign_skill_points: Option<&'a AttributeVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    buy: Option<WireIds<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skill: Option<&'a SkillUse>,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    move_to: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    yell: Option<WireMessage<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
struct WireIds<'a> {
    ids: &'a [String],
}

#[derive(Debug, PartialEq, Serialize)]
struct WireMessage<'a> {
    text: &'a str,
}

impl<'a> From<&'a CommandBatch> for WireBatch<'a> {
    fn from(batch: &'a CommandBatch) -> Self {
        let mut wire = WireBatch {
            yell: batch.yell.as_deref().map(|text| WireMessage { text }),
            ..WireBatch::default()
        };
        match &batch.action {
            Some(Command::AssignSkillPoints(points)) => wire.assign_skill_points = Some(points),
            Some(Command::Buy(ids)) => wire.buy = Some(WireIds { ids }),
            Some(Command::UseSkill(skill)) => wire.skill = Some(skill),
            Some(Command::Move(position)) => wire.move_to = Some(*position),
            None => {}
        }
        wire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(batch: &CommandBatch) -> serde_json::Value {
        serde_json::to_value(WireBatch::from(batch)).expect("batch encodes")
    }

    #[test]
    fn move_with_yell() {
        let batch = CommandBatch::new(Command::Move(Position::new(3, 4))).with_yell("Onward");

        assert_eq!(
            encode(&batch),
            json!({
                "move": { "positionX": 3, "positionY": 4 },
                "yell": { "text": "Onward" }
            })
        );
    }

    #[test]
    fn buy_lists_ids() {
        let batch = CommandBatch::new(Command::Buy(vec!["sword".into(), "cap".into()]));
        assert_eq!(encode(&batch), json!({ "buy": { "ids": ["sword", "cap"] } }));
    }

    #[test]
    fn skill_use_carries_target() {
        let batch = CommandBatch::new(Command::UseSkill(SkillUse::on_target("slash", "gob")));
        assert_eq!(
            encode(&batch),
            json!({ "skill": { "skillId": "slash", "targetId": "gob" } })
        );
    }

    #[test]
    fn chat_only_batch() {
        let batch = CommandBatch::yell_only("Hello?");
        assert_eq!(encode(&batch), json!({ "yell": { "text": "Hello?" } }));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = HttpGameApi::new("http://localhost:8080/", "key");
        assert_eq!(api.url("/v1/game"), "http://localhost:8080/v1/game");
    }
}
