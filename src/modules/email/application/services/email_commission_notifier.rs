use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    CommissionNotifier, EmailSender, NewRequestNotice, NotificationError, StatusUpdateNotice,
};

/// Renders commission notifications as HTML mail.
#[derive(Clone)]
pub struct EmailCommissionNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    operator_email: String,
}

impl fmt::Debug for EmailCommissionNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailCommissionNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("operator_email", &self.operator_email)
            .finish()
    }
}

impl EmailCommissionNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, operator_email: &str) -> Self {
        Self {
            sender,
            operator_email: operator_email.to_string(),
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub(crate) fn render_new_request(notice: &NewRequestNotice) -> (String, String) {
    let subject = "New Commission Request Received".to_string();
    let body = format!(
        "<h1>New Commission Request</h1>\
         <p>You have received a new commission request from <strong>{username}</strong>.</p>\
         <h2>Request Details:</h2>\
         <ul>\
         <li><strong>Service:</strong> {service}</li>\
         <li><strong>Characters:</strong> {characters}</li>\
         <li><strong>Alternatives:</strong> {alternatives}</li>\
         <li><strong>Poses:</strong> {poses}</li>\
         <li><strong>Price:</strong> ${price:.2}</li>\
         <li><strong>NSFW:</strong> {nsfw}</li>\
         </ul>\
         <h3>Description:</h3>\
         <p>{description}</p>\
         <p>Please log in to review and respond to this request.</p>",
        username = escape_html(&notice.username),
        service = escape_html(&notice.service_name),
        characters = notice.character_count,
        alternatives = notice.alternative_count,
        poses = notice.pose_count,
        price = notice.total_price,
        nsfw = yes_no(notice.is_nsfw),
        description = escape_html(&notice.description),
    );
    (subject, body)
}

pub(crate) fn render_status_update(notice: &StatusUpdateNotice) -> (String, String) {
    let subject = format!("Commission Update: {}", notice.status);
    let expected = notice
        .expected_completion_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Not scheduled yet".to_string());

    let body = format!(
        "<h1>Commission Status Update</h1>\
         <p>Your commission has been updated to: <strong>{status}</strong></p>\
         <p>Current progress: <strong>{progress}</strong></p>\
         <p>Expected completion date: <strong>{expected}</strong></p>\
         <p>You can log in to view more details and any updates.</p>",
        status = escape_html(&notice.status),
        progress = escape_html(&notice.progress),
        expected = expected,
    );
    (subject, body)
}

#[async_trait]
impl CommissionNotifier for EmailCommissionNotifier {
    async fn notify_new_request(&self, notice: NewRequestNotice) -> Result<(), NotificationError> {
        let (subject, body) = render_new_request(&notice);

        self.sender
            .send_html(&self.operator_email, &subject, &body)
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

        tracing::info!(username = %notice.username, "New request notification sent");
        Ok(())
    }

    async fn notify_status_update(
        &self,
        notice: StatusUpdateNotice,
    ) -> Result<(), NotificationError> {
        let (subject, body) = render_status_update(&notice);

        self.sender
            .send_html(&notice.client_email, &subject, &body)
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

        tracing::info!(status = %notice.status, "Status update notification sent");
        Ok(())
    }
}
