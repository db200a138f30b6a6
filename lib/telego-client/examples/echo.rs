//! Example to echo user text messages. Runnable as:
//!
//! ```sh
//! cargo run --example echo -- BOT_TOKEN
//! ```
//!
//! The bot answers `/start` with a greeting, and any other text with the same text.
//! Press Ctrl+C to stop it.

use simple_logger::SimpleLogger;
use std::env;
use telego_client::functions::{GetUpdates, SendMessage};
use telego_client::types::{ChatAction, Message, UpdateKind};
use telego_client::{Client, InvocationError};
use tokio::{runtime, signal};

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

/// Seconds the server may hold each poll open while no update arrives.
const POLL_TIMEOUT: i32 = 30;

async fn handle_message(
    client: Client,
    message: Message,
) -> std::result::Result<(), InvocationError> {
    let Some(text) = message.text.as_deref() else {
        return Ok(());
    };

    client
        .send_chat_action(message.chat.id, ChatAction::Typing)
        .await?;

    let reply = match message.command() {
        Some("start") => format!("Hi! I'm {}, send me anything.", client.me().first_name),
        _ => text.to_string(),
    };

    println!("Responding to {}", message.chat.id);
    client
        .send_message(
            SendMessage::new(message.chat.id, reply).reply_to_message_id(message.message_id),
        )
        .await?;

    Ok(())
}

async fn async_main() -> Result {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let token = env::args().nth(1).expect("token missing");

    println!("Connecting to Telegram...");
    let client = Client::new(token, true, true).await?;
    println!("Connected as @{}!", client.me().username.as_deref().unwrap_or("?"));

    println!("Waiting for messages...");
    let mut offset = 0;
    loop {
        let request = GetUpdates::new().offset(offset).timeout(POLL_TIMEOUT);
        let updates = tokio::select! {
            _ = signal::ctrl_c() => break,
            updates = client.get_updates(request) => updates?,
        };

        for update in updates {
            offset = update.update_id + 1;
            if let Some(UpdateKind::Message(message)) = update.kind() {
                let handle = client.clone();
                let message = message.clone();
                tokio::task::spawn(async move {
                    if let Err(e) = handle_message(handle, message).await {
                        eprintln!("Error handling updates!: {e}");
                    }
                });
            }
        }
    }

    println!("Stopped polling");
    Ok(())
}

fn main() -> Result {
    runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_main())
}
