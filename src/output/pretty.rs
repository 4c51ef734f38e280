//! Human-oriented rendering

use colored::Colorize;
use serde_json::Value;

use crate::client::models::LoginResponse;
use crate::error::Result;

/// Render a login response body.
///
/// Bodies carrying a player get a short summary; anything else is shown as
/// indented JSON so nothing the server said is hidden.
pub fn render_login(payload: &Value) -> Result<String> {
    let view = LoginResponse::from_payload(payload);

    let Some(player) = view.data else {
        let mut out = String::new();
        if let Some(message) = &view.message {
            out.push_str(&format!("{}\n", message.bold()));
        }
        out.push_str(&serde_json::to_string_pretty(payload)?);
        return Ok(out);
    };

    let mut lines = Vec::new();
    lines.push(format!("{} Logged in", "✓".green()));

    let name = player.player_name.as_deref().unwrap_or("(unnamed player)");
    lines.push(format!("  Player: {}", name.bold()));
    if let Some(gmail) = &player.gmail {
        lines.push(format!("  Email:  {}", gmail));
    }
    if !player.roles.is_empty() {
        lines.push(format!("  Roles:  {}", player.roles.join(", ").cyan()));
    }
    if let Some(id) = player.id {
        lines.push(format!("  ID:     {}", id));
    }
    if let Some(message) = &view.message {
        lines.push(format!("\n{}", message.dimmed()));
    }

    Ok(lines.join("\n"))
}

/// One `label: value` row, value dimmed when absent
pub fn field_row(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{}: {}", label, v.cyan()),
        None => format!("{}: {}", label, "(not set)".dimmed()),
    }
}
