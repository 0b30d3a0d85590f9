//! Portfolio contact form
//!
//! Terminal rendition of the portfolio's contact section. Fields are
//! validated as you leave them, the whole form is re-checked on submit, and
//! the values are posted to the contact relay (`CONTACT_API_URL`).
//!
//! Logs go to stderr; stdout carries the form.

mod client;
mod form;
mod notification;
mod page;
mod validator;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use client::{ContactTransport, RelayClient};
use notification::NotificationCenter;
use page::{ContactPage, SubmitOutcome};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = RelayClient::from_env()?;
    tracing::info!("Submitting to {}", client.base_url());

    let mut page = ContactPage::new(client, NotificationCenter::default());
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Get in touch. Leave the message with an empty line.\n");

    loop {
        if !fill_form(&mut page, &mut input).await? {
            return Ok(());
        }

        println!("\n{}", page.form().render());
        let outcome = page.submit().await;
        if let Some(banner) = page.notifications().current() {
            println!("{}", banner.render());
        }

        match outcome {
            SubmitOutcome::Sent => return Ok(()),
            SubmitOutcome::Invalid | SubmitOutcome::Failed(_) => {
                if !confirm(&mut input, "Try again? [y/N] ").await? {
                    return Ok(());
                }
                page.notifications().dismiss();
            }
            SubmitOutcome::Ignored => {}
        }
    }
}

/// Walk the fields in order, re-prompting a field until it passes.
/// Returns false when stdin closes.
async fn fill_form<T: ContactTransport>(
    page: &mut ContactPage<T>,
    input: &mut Input,
) -> Result<bool> {
    let fields: Vec<(String, String, bool, String)> = page
        .form()
        .fields()
        .iter()
        .map(|f| (f.name.clone(), f.label.clone(), f.multiline, f.value.clone()))
        .collect();

    for (name, label, multiline, current) in fields {
        loop {
            page.focus(&name);

            let prompt = if current.is_empty() {
                format!("{}: ", label)
            } else {
                format!("{} [{}]: ", label, current.lines().next().unwrap_or_default())
            };
            let value = if multiline {
                read_block(input, &prompt).await?
            } else {
                read_line(input, &prompt).await?
            };
            let Some(value) = value else {
                return Ok(false);
            };

            // Enter on a prefilled field keeps the previous value
            if !(value.is_empty() && !current.is_empty()) {
                page.input(&name, &value);
            }

            match page.blur(&name) {
                Some(false) => {
                    if let Some(error) = page.form().field(&name).and_then(|f| f.error.clone()) {
                        println!("  ! {}", error);
                    }
                }
                _ => break,
            }
        }
    }

    Ok(true)
}

async fn prompt(text: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

async fn read_line(input: &mut Input, text: &str) -> Result<Option<String>> {
    prompt(text).await?;
    Ok(input.next_line().await?)
}

/// Read lines until an empty one
async fn read_block(input: &mut Input, text: &str) -> Result<Option<String>> {
    prompt(&format!("{}\n", text.trim_end())).await?;

    let mut lines = Vec::new();
    loop {
        prompt("  | ").await?;
        match input.next_line().await? {
            None if lines.is_empty() => return Ok(None),
            None => break,
            Some(line) if line.is_empty() => break,
            Some(line) => lines.push(line),
        }
    }
    Ok(Some(lines.join("\n")))
}

async fn confirm(input: &mut Input, text: &str) -> Result<bool> {
    let answer = read_line(input, text).await?.unwrap_or_default();
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
