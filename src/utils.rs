use crate::chat::{ChatMessageRole, OpenAiChatRequestBody};
use crate::config::ExecutorConfig;
use crate::constants::PROMPT_PREVIEW_CHARS;
use crate::error::{ConfigError, ExecutorError};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::io::{self, BufRead, Write};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, ExecutorError> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn build_chat_request(prompt: &str, config: &ExecutorConfig) -> OpenAiChatRequestBody {
    OpenAiChatRequestBody {
        model: config.model.clone(),
        messages: vec![ChatMessageRole {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: config.temperature,
    }
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// First `PROMPT_PREVIEW_CHARS` characters of a prompt, cut on a char boundary.
pub fn preview(prompt: &str) -> &str {
    match prompt.char_indices().nth(PROMPT_PREVIEW_CHARS) {
        Some((idx, _)) => &prompt[..idx],
        None => prompt,
    }
}

/// Asks for the API key on `output` and reads one line from `input`.
pub fn read_api_key<R, W>(input: &mut R, output: &mut W) -> Result<String, Box<dyn std::error::Error>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Enter your API key: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let key = line.trim().to_string();
    if key.is_empty() {
        return Err(ConfigError::EmptyApiKey.into());
    }
    Ok(key)
}

pub fn prompt_for_api_key() -> Result<String, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    read_api_key(&mut stdin.lock(), &mut stdout)
}
