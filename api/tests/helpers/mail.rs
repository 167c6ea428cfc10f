use api::services::email::{Mail, MailError, MailTransport};
use async_trait::async_trait;
use std::{sync::Mutex, time::Duration};

/// Keeps every mail instead of delivering it.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Mail>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }

    /// Polls until `count` mails were recorded or one second has passed.
    pub async fn wait_for(&self, count: usize) -> Vec<Mail> {
        let _ = tokio::time::timeout(Duration::from_secs(1), async {
            while self.sent.lock().unwrap().len() < count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        self.sent()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

/// Rejects every mail the way an unreachable SMTP relay would.
pub struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _mail: Mail) -> Result<(), MailError> {
        let source = "".parse::<lettre::Address>().unwrap_err();
        Err(MailError::Address {
            address: String::new(),
            source,
        })
    }
}
