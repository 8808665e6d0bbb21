//! Card fragment rendering

use crate::card::CardRecord;
use crate::render::text::escape_nl2br;

/// Render one card (article + comment) as a self-contained HTML fragment.
///
/// The fragment is table-based with inline styles only, so it can be
/// embedded directly in an email body. All prose fields are escaped; the
/// resolved link and colors are embedded verbatim as attribute values.
/// Cards are independent of each other; `index` only drives the
/// positional defaults (anchor link and strip color).
pub fn render_card(index: usize, card: &CardRecord) -> String {
    let resolved = card.resolve(index);
    let issue_label = escape_nl2br(&card.issue_label);
    let article_title = escape_nl2br(&card.article_title);
    let comment_text = escape_nl2br(&card.comment_text);
    let commenter_name = escape_nl2br(&card.commenter_name);
    let commenter_org = escape_nl2br(&card.commenter_org);
    let link_url = &resolved.link_url;
    let strip_color = &resolved.strip_color;
    let comment_bar_color = &resolved.comment_bar_color;
    let monogram = resolved.monogram;

    format!(
        r#"<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="background:#ffffff;border:1px solid #e5e7eb;border-radius:12px;">
  <tbody>
    <tr><td style="height:4px;background:{strip_color};border-top-left-radius:12px;border-top-right-radius:12px;"></td></tr>
    <tr>
      <td style="padding:18px 20px 8px 20px;">
        <table role="presentation" width="100%">
          <tbody><tr>
            <td style="white-space:nowrap;color:#475569;font:600 13px/1.4 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;padding-right:10px;vertical-align:bottom;">{issue_label}</td>
            <td style="color:#0f172a;font:700 19px/1.4 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">{article_title}</td>
          </tr></tbody>
        </table>
      </td>
    </tr>
    <tr><td style="padding:6px 20px 0 20px;color:#64748b;font:600 13px/1 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">コメント</td></tr>
    <tr>
      <td style="padding:10px 20px 6px 20px;">
        <table role="presentation" width="100%">
          <tbody><tr>
            <td style="width:6px;background:{comment_bar_color};"></td>
            <td style="padding:8px 0 8px 12px;color:#334155;font:15px/1.8 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">{comment_text}</td>
          </tr></tbody>
        </table>
      </td>
    </tr>
    <tr>
      <td style="padding:2px 20px 0 20px;">
        <table role="presentation">
          <tbody><tr>
            <td align="center" style="width:40px;height:40px;background:#eef2f7;border-radius:50%;color:#64748b;font:700 18px Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;line-height:40px;vertical-align:middle;display:table-cell;">{monogram}</td>
            <td style="width:12px;"></td>
            <td style="color:#0f172a;font:600 15px/1.3 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">{commenter_name}<br>
              <span style="color:#64748b;font:12px/1.6 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;">{commenter_org}</span>
            </td>
          </tr></tbody>
        </table>
      </td>
    </tr>
    <tr>
      <td style="padding:12px 20px 18px 20px;">
        <table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0">
          <tbody><tr>
            <td style="background:#e8f0ff;border:1px solid #c7d2fe;border-radius:8px;">
              <a href="{link_url}" style="display:block;width:100%;text-align:center;color:#1d4ed8;text-decoration:none;font:700 15px/1 Arial,'Hiragino Kaku Gothic ProN',Meiryo,sans-serif;padding:12px 18px;border-radius:8px;">
                記事を読む
              </a>
            </td>
          </tr></tbody>
        </table>
      </td>
    </tr>
  </tbody>
</table>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardBuilder;

    fn sample_card() -> CardRecord {
        CardBuilder::new()
            .issue_label("第3742号")
            .article_title("インボイス制度における返還インボイスの取扱い明確化")
            .comment_text("💬 実務で迷いやすい論点です。\n続報に注目しています。")
            .commenter_name("田中 太郎")
            .commenter_org("田中税理士事務所")
            .build()
    }

    #[test]
    fn test_fragment_contains_escaped_prose() {
        let html = render_card(0, &sample_card());
        assert!(html.contains("第3742号"));
        assert!(html.contains("インボイス制度における返還インボイスの取扱い明確化"));
        assert!(html.contains("実務で迷いやすい論点です。<br>続報に注目しています。"));
        assert!(html.contains("田中 太郎"));
        assert!(html.contains("田中税理士事務所"));
    }

    #[test]
    fn test_markup_in_title_is_escaped() {
        let card = CardBuilder::new()
            .article_title("<script>alert('x')</script>")
            .commenter_name("田中 太郎")
            .build();
        let html = render_card(0, &card);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
    }

    #[test]
    fn test_positional_defaults_applied() {
        let html = render_card(2, &sample_card());
        assert!(html.contains(r##"href="#article3""##));
        assert!(html.contains("background:#c7d2fe;border-top-left-radius"));
    }

    #[test]
    fn test_explicit_link_and_colors_embedded_verbatim() {
        let card = CardBuilder::new()
            .commenter_name("佐藤 花子")
            .link_url("https://example.com/a?b=1&c=2")
            .strip_color("#123456")
            .comment_bar_color("#654321")
            .build();
        let html = render_card(0, &card);
        assert!(html.contains(r#"href="https://example.com/a?b=1&c=2""#));
        assert!(html.contains("background:#123456;"));
        assert!(html.contains("background:#654321;"));
    }

    #[test]
    fn test_monogram_in_avatar_cell() {
        let html = render_card(0, &sample_card());
        assert!(html.contains(">田</td>"));
    }

    #[test]
    fn test_cta_label_present() {
        let html = render_card(0, &sample_card());
        assert!(html.contains("記事を読む"));
        assert!(html.contains("コメント"));
    }

    #[test]
    fn test_missing_optional_fields_never_fail() {
        let html = render_card(0, &CardRecord::default());
        assert!(html.contains(r##"href="#article1""##));
        // fallback monogram for the unspecified name
        assert!(html.contains(">名</td>"));
    }
}
