//! About page: personal info, contact link and social links.

use folio_core::content::{DiscordMessages, PersonalInfo, SocialConfig};
use folio_core::format::{email_link, strip_tags};
use folio_core::services::ContentSource;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::common::{sanitize_for_display, truncate_with_ellipsis};
use crate::hit::HitTarget;
use crate::render::SPINNER_FRAMES;
use crate::state::TuiState;

const EMAIL_KEY: &str = "email";
const DISCORD_KEY: &str = "discord";
const DEFAULT_CONTACT_TEXT: &str = "Contact me";

#[derive(Debug, Default)]
pub struct AboutState {
    pub info: Option<PersonalInfo>,
    pub social: Option<SocialConfig>,
}

/// What a social link does when clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum SocialAction {
    Open(String),
    /// Shows the configured "coming soon" popup.
    Discord(DiscordMessages),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub key: String,
    pub label: String,
    pub action: SocialAction,
}

impl AboutState {
    /// Primary then secondary links, skipping networks without a URL.
    pub fn social_links(&self) -> Vec<SocialLink> {
        let Some(social) = &self.social else {
            return Vec::new();
        };
        let mut links: Vec<SocialLink> = Vec::new();
        let keys = social
            .social_groups
            .primary
            .iter()
            .chain(&social.social_groups.secondary);
        for key in keys {
            if links.iter().any(|link| &link.key == key) {
                continue;
            }
            let Some(target) = social
                .social_media
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
            else {
                continue;
            };
            let action = match key.as_str() {
                EMAIL_KEY => SocialAction::Open(mailto(social, target)),
                DISCORD_KEY => SocialAction::Discord(social.messages.discord.clone()),
                _ => SocialAction::Open(target.to_string()),
            };
            links.push(SocialLink {
                key: key.clone(),
                label: social.title_of(key).to_string(),
                action,
            });
        }
        links
    }

    pub fn social_action(&self, index: usize) -> Option<SocialAction> {
        self.social_links()
            .into_iter()
            .nth(index)
            .map(|link| link.action)
    }

    /// `mailto:` link behind the contact text, when an address is configured.
    pub fn contact_link(&self) -> Option<String> {
        let social = self.social.as_ref()?;
        let email = social
            .social_media
            .get(EMAIL_KEY)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())?;
        Some(mailto(social, email))
    }

    fn contact_text(&self) -> &str {
        self.social
            .as_ref()
            .map(|s| s.messages.contact.contact_link_text.trim())
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_CONTACT_TEXT)
    }
}

fn mailto(social: &SocialConfig, email: &str) -> String {
    let contact = &social.messages.contact;
    email_link(&contact.email_subject, &contact.email_body, email)
}

// ============================================================================
// Render
// ============================================================================

pub fn render_about(frame: &mut Frame, area: Rect, state: &TuiState) {
    let palette = state.palette();
    if area.height < 4 || area.width < 8 {
        return;
    }
    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width - 4,
        area.height.saturating_sub(1),
    );
    let width = inner.width as usize;

    let Some(info) = &state.about.info else {
        let text = if state.tasks.is_running(ContentSource::PersonalInfo) {
            let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
            format!("{spinner} Loading profile…")
        } else {
            "No profile to show.".to_string()
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(palette.muted)),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
        return;
    };

    let titles: Vec<&str> = [
        info.title_primary.as_str(),
        info.title_secondary.as_str(),
        info.title_tertiary.as_str(),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .collect();

    let mut header = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&sanitize_for_display(&info.name), width),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&titles.join(" | "), width),
            Style::default().fg(palette.text),
        )),
    ];
    let tagline = strip_tags(&info.tagline);
    if !tagline.is_empty() {
        header.push(Line::from(Span::styled(
            truncate_with_ellipsis(&sanitize_for_display(&tagline), width),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    if !info.location.trim().is_empty() {
        header.push(Line::from(Span::styled(
            truncate_with_ellipsis(&format!("⌖ {}", info.location.trim()), width),
            Style::default().fg(palette.muted),
        )));
    }
    let header_height = (header.len() as u16).min(inner.height);
    frame.render_widget(
        Paragraph::new(header),
        Rect::new(inner.x, inner.y, inner.width, header_height),
    );

    // Contact and social rows are pinned to the bottom; the summary fills the rest.
    let links_y = inner.bottom().saturating_sub(1);
    let contact_y = links_y.saturating_sub(2);
    let summary_y = inner.y + header_height + 1;
    if contact_y > summary_y {
        let summary = strip_tags(&info.summary);
        frame.render_widget(
            Paragraph::new(sanitize_for_display(&summary).into_owned())
                .style(Style::default().fg(palette.text))
                .wrap(Wrap { trim: true }),
            Rect::new(inner.x, summary_y, inner.width, contact_y - summary_y - 1),
        );
    }

    let mut hits = state.hits.borrow_mut();
    if contact_y > inner.y + header_height && state.about.contact_link().is_some() {
        let label = format!("✉ {}", state.about.contact_text());
        let label = truncate_with_ellipsis(&label, width);
        let contact = Rect::new(inner.x, contact_y, label.width() as u16, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default()
                    .fg(palette.link)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            contact,
        );
        hits.push(contact, HitTarget::Contact);
    }

    let mut x = inner.x;
    for (index, link) in state.about.social_links().iter().enumerate() {
        let label = format!("[{}]", link.label);
        let label_width = label.width() as u16;
        if x + label_width > inner.right() {
            break;
        }
        let rect = Rect::new(x, links_y, label_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(palette.link))),
            rect,
        );
        hits.push(rect, HitTarget::Social(index));
        x += label_width + 2;
    }
}
