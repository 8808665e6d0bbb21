//! Document composition
//!
//! Assembles the final mail: fixed header and footer shell around the
//! ordered card fragments. The output is a standalone table-based block
//! (no html/head/body wrapping) meant to be pasted into an email body.

use crate::card::CardRecord;
use crate::config::DocumentConfig;
use crate::render::card::render_card;
use crate::render::date::format_delivery;
use crate::render::text::escape_nl2br;

/// Visual spacer inserted between consecutive cards.
pub const CARD_SPACER: &str = r#"<div style="height:18px;line-height:18px;">&nbsp;</div>"#;

/// Body placeholder used when no cards were supplied.
pub const EMPTY_CARDS_PLACEHOLDER: &str = "<!-- No cards -->";

/// The generated artifact: the mail HTML plus a suggested filename
/// derived from the delivery date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// The complete mail HTML
    pub html: String,
    /// Suggested filename, `comment_clip_{YYYYMMDD}.html`
    pub file_name: String,
}

/// Compose the full document from header fields and pre-rendered card
/// fragments.
///
/// Fragments are joined in the given order with [`CARD_SPACER`] between
/// consecutive cards; an empty sequence renders [`EMPTY_CARDS_PLACEHOLDER`]
/// instead. The shell (header, body container, footer) is always emitted.
pub fn compose_document(config: &DocumentConfig, card_fragments: &[String]) -> String {
    let title_text = escape_nl2br(&config.title_text);
    let badge_text = escape_nl2br(&config.badge_text);
    let header_title = escape_nl2br(&config.header_title);
    let delivery_text = escape_nl2br(&format_delivery(
        config.delivery_date,
        config.delivery_date_style,
    ));
    let description_text = escape_nl2br(&config.description_text);

    let body_cards_html = if card_fragments.is_empty() {
        EMPTY_CARDS_PLACEHOLDER.to_string()
    } else {
        card_fragments.join(CARD_SPACER)
    };

    format!(
        r#"<meta charset="UTF-8">
<title>{title_text}</title>

<!-- 100% wrapper -->
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="margin:0;padding:0;background:#f3f6fb;">
  <tbody><tr>
    <td align="center" style="padding:0;">

      <!-- ===== Header: full width background ===== -->
      <table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="background:#0b1b34;">
        <tbody><tr>
          <td align="center" style="padding:0;">
            <!-- inner fixed width -->
            <table role="presentation" width="900" cellpadding="0" cellspacing="0" border="0" style="max-width:900px;width:100%;">
              <tbody><tr>
                <td style="padding:20px 24px 12px 24px;">
                  <!-- row: badge + title -->
                  <table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0">
                    <tbody><tr>
                      <td>
                        <span style="display:inline-block;vertical-align:middle;background:#22315b;border:1px solid #2f3c66;color:#ffffff;font-weight:800;font-size:12px;letter-spacing:.04em;padding:7px 14px;border-radius:16px;font-family:Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">{badge_text}</span>
                        <span style="display:inline-block;vertical-align:middle;margin-left:12px;color:#ffffff;font-weight:800;font-size:22px;letter-spacing:.01em;font-family:Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">{header_title}</span>
                      </td>
                    </tr></tbody>
                  </table>
                  <!-- row: date -->
                  <table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0">
                    <tbody><tr>
                      <td style="padding-top:8px;color:#dbeafe;font-size:14px;font-family:Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">{delivery_text}</td>
                    </tr></tbody>
                  </table>
                  <!-- row: description -->
                  <table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0">
                    <tbody><tr>
                      <td style="padding-top:6px;color:#c7d2fe;font-size:13px;line-height:1.7;font-family:Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">
                        {description_text}
                      </td>
                    </tr></tbody>
                  </table>
                </td>
              </tr></tbody>
            </table>
          </td>
        </tr></tbody>
      </table>
      <!-- ===== /Header ===== -->

      <!-- ===== Body container ===== -->
      <table role="presentation" width="900" cellpadding="0" cellspacing="0" border="0" style="max-width:900px;width:100%;background:#f3f6fb;">
        <tbody><tr>
          <td style="padding:24px;">

            <!-- === Cards === -->
            {body_cards_html}

          </td>
        </tr></tbody>
      </table>
      <!-- ===== /Body ===== -->

      <!-- ===== Footer ===== -->
      <table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="background:#0b1b34;">
        <tbody><tr>
          <td align="center" style="padding:18px 12px;">
            <div style="color:#ffffff;font:12.5px/1.6 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">
              Copyright© 2016 Zeimu Kenkyukai, All rights reserved.
            </div>
            <div style="margin-top:8px;font-family:Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">
              <a href="https://www.zeiken.co.jp/privacy/" style="color:#ffffff;text-decoration:none;margin:0 10px;">個人情報の保護について</a>
              <a href="https://www.zeiken.co.jp/contact/request/" style="color:#ffffff;text-decoration:none;margin:0 10px;">お問い合わせ</a>
            </div>
          </td>
        </tr></tbody>
      </table>
      <!-- ===== /Footer ===== -->

    </td>
  </tr></tbody>
</table>
"#
    )
}

/// Run the full pipeline: render each card at its position, compose the
/// document, and derive the suggested filename from the delivery date.
pub fn generate(config: &DocumentConfig, cards: &[CardRecord]) -> GeneratedDocument {
    tracing::debug!(cards = cards.len(), "Generating document");
    let fragments: Vec<String> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| render_card(index, card))
        .collect();

    let html = compose_document(config, &fragments);
    let file_name = format!(
        "comment_clip_{}.html",
        config.delivery_date.format("%Y%m%d")
    );

    GeneratedDocument { html, file_name }
}
