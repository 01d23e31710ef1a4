//! Plain-text rendering of ticket lists for tool output.

use crate::ticket::Ticket;

pub const NO_TICKETS: &str = "No tickets found.";
const COMMENT_PREVIEW_CHARS: usize = 100;

pub fn format_tickets(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return NO_TICKETS.to_string();
    }

    tickets
        .iter()
        .map(format_ticket)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_ticket(ticket: &Ticket) -> String {
    let mut lines = vec![
        format!("Key: {}", ticket.key),
        format!("Summary: {}", ticket.summary.as_deref().unwrap_or_default()),
        format!("Status: {}", ticket.status.as_deref().unwrap_or_default()),
        format!("Assignee: {}", ticket.assignee),
        format!("Reporter: {}", ticket.reporter),
        format!("URL: {}", ticket.url),
    ];

    if let Some(comments) = ticket.comments.as_ref().filter(|items| !items.is_empty()) {
        lines.push("Comments:".to_string());
        for comment in comments {
            // The ellipsis is appended even when nothing was cut.
            lines.push(format!(
                "  - {} ({}): {}...",
                comment.author,
                comment.created,
                preview(&comment.body, COMMENT_PREVIEW_CHARS)
            ));
        }
    }

    if let Some(attachments) = ticket.attachments.as_ref().filter(|items| !items.is_empty()) {
        lines.push("Attachments:".to_string());
        for attachment in attachments {
            lines.push(format!("  - {} ({} bytes)", attachment.filename, attachment.size));
        }
    }

    lines.join("\n")
}

fn preview(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
