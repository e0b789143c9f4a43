mod banner;
mod chat;
mod config;
mod constants;
mod cycler;
mod error;
mod executor;
mod logging;
mod utils;

use crate::banner::print_banner;
use crate::config::AppConfig;
use crate::constants::{API_KEY_ENV, QUESTIONS};
use crate::cycler::{Driver, QuestionCycler};
use crate::executor::Executor;
use crate::logging::init_logging;
use crate::utils::prompt_for_api_key;
use std::{env, error::Error, io};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_logging(&config.log_file)?;

    print_banner();

    let api_key = match env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
        _ => prompt_for_api_key()?,
    };

    let executor = Executor::new(config.executor, &api_key)?;
    log::info!("Sending questions to {}", executor.url());

    let cycler = QuestionCycler::new(QUESTIONS.iter().copied());
    let mut driver = Driver::new(executor, cycler, config.question_delay, io::stdout());
    driver.run_forever().await;

    Ok(())
}
