use crate::executor::Executor;
use crate::utils::preview;
use colored::Colorize;
use log::{error, info, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// A fixed prompt set handed out one shuffled pass at a time.
pub struct QuestionCycler {
    prompts: Vec<String>,
    rng: StdRng,
}

impl QuestionCycler {
    pub fn new<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(prompts, StdRng::from_entropy())
    }

    pub fn with_rng<I, S>(prompts: I, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompts: prompts.into_iter().map(Into::into).collect(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Reorders the set with a uniform shuffle and returns the order for this cycle.
    pub fn next_cycle(&mut self) -> &[String] {
        self.prompts.shuffle(&mut self.rng);
        &self.prompts
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub answered: usize,
    pub failed: usize,
}

/// Feeds every prompt of each cycle through the executor, one at a time.
pub struct Driver<W: Write> {
    executor: Executor,
    cycler: QuestionCycler,
    question_delay: Duration,
    out: W,
}

impl<W: Write> Driver<W> {
    pub fn new(executor: Executor, cycler: QuestionCycler, question_delay: Duration, out: W) -> Self {
        Self {
            executor,
            cycler,
            question_delay,
            out,
        }
    }

    /// Runs cycle after cycle. Never returns; the process is stopped from outside.
    pub async fn run_forever(&mut self) {
        loop {
            self.run_cycle().await;
        }
    }

    pub async fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::default();
        let total = self.cycler.len();
        if self.cycler.is_empty() {
            warn!("No questions to ask");
            sleep(self.question_delay).await;
            return report;
        }
        info!("Starting chatbot with {} questions in random order", total);

        let prompts = self.cycler.next_cycle();
        for (i, question) in prompts.iter().enumerate() {
            info!("Processing question {}/{}", i + 1, total);
            info!("Question: {}", question);

            let start = Instant::now();
            match self.executor.execute(question).await {
                Ok(response) => {
                    let elapsed = start.elapsed();
                    let printed = writeln!(
                        self.out,
                        "{}\n{}",
                        format!("Answer to '{}...':", preview(question)).bold().cyan(),
                        response
                    )
                    .and_then(|_| self.out.flush());
                    if let Err(err) = printed {
                        error!("Failed to print answer: {}", err);
                    }

                    info!("Received full response in {:.2}s", elapsed.as_secs_f64());
                    info!("Response length: {} characters", response.chars().count());
                    report.answered += 1;

                    sleep(self.question_delay).await;
                }
                Err(err) => {
                    error!("Failed to process question: {}", err);
                    report.failed += 1;
                }
            }
        }

        report
    }
}
