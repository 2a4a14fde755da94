use imap::ClientBuilder;
use shared_types::RawMessage;
use std::collections::VecDeque;

use super::{parse_raw_message, MessageSource, SourceError};
use crate::config::ImapConfig;

/// Reads every message of one IMAP folder, oldest UID first
pub struct ImapSource {
    session: imap::Session<imap::Connection>,
    mailbox: String,
    pending: VecDeque<u32>,
}

impl ImapSource {
    pub fn connect(config: &ImapConfig) -> Result<Self, SourceError> {
        let client = ClientBuilder::new(config.host.as_str(), config.port)
            .connect()
            .map_err(|e| SourceError::Connect(e.to_string()))?;

        let mut session = client
            .login(&config.username, &config.password)
            .map_err(|(e, _)| SourceError::Login(format!("{:?}", e)))?;

        let mailbox = session
            .select(&config.folder)
            .map_err(|e| SourceError::Mailbox {
                mailbox: config.folder.clone(),
                message: e.to_string(),
            })?;
        tracing::info!("Selected {} ({} messages)", config.folder, mailbox.exists);

        let uids = session
            .uid_search("ALL")
            .map_err(|e| SourceError::Mailbox {
                mailbox: config.folder.clone(),
                message: e.to_string(),
            })?;

        let mut uids: Vec<u32> = uids.into_iter().collect();
        uids.sort_unstable();
        tracing::info!("Found {} messages in {}", uids.len(), config.folder);

        Ok(Self {
            session,
            mailbox: config.folder.clone(),
            pending: uids.into(),
        })
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn logout(&mut self) -> Result<(), SourceError> {
        self.session
            .logout()
            .map_err(|e| SourceError::Connect(format!("Logout failed: {}", e)))
    }
}

impl MessageSource for ImapSource {
    fn next_message(&mut self) -> Result<Option<RawMessage>, SourceError> {
        while let Some(uid) = self.pending.pop_front() {
            let messages = self
                .session
                .uid_fetch(uid.to_string(), "RFC822")
                .map_err(|e| SourceError::Fetch {
                    id: uid.to_string(),
                    message: e.to_string(),
                })?;

            let Some(body) = messages.iter().next().and_then(|message| message.body()) else {
                tracing::warn!("Message {} in {} has no body, skipping", uid, self.mailbox);
                continue;
            };

            match parse_raw_message(&uid.to_string(), body) {
                Some(message) => return Ok(Some(message)),
                None => {
                    tracing::warn!("Failed to parse message {} in {}, skipping", uid, self.mailbox);
                }
            }
        }

        Ok(None)
    }
}
