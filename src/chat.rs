use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct ChatApiResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChatMessage {
    pub content: String,
}

impl ChatApiResponse {
    /// Content of the first choice, if the server sent one.
    pub fn into_first_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

#[derive(Debug, Serialize)]
pub struct OpenAiChatRequestBody {
    pub model: String,
    pub messages: Vec<ChatMessageRole>,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageRole {
    pub role: String,
    pub content: String,
}
