//! Welcome email content.
//!
//! The body is a fixed, table-based HTML document (email clients ignore most
//! modern CSS). Only the recipient varies per submission.

use resend::EmailMessage;

/// Sender shown in the recipient's inbox.
///
/// `onboarding@resend.dev` is Resend's free-plan sender; swap in a branded
/// address once a custom domain is verified.
pub const FROM_ADDRESS: &str = "Ayo from VibeCode <onboarding@resend.dev>";

pub const SUBJECT: &str = "You're on the VibeCode waitlist \u{1F680}";

const WELCOME_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width">
  <title>You're in!</title>
</head>
<body style="margin:0;padding:0;background:#080810;font-family:'Segoe UI',sans-serif">
  <table width="100%" cellpadding="0" cellspacing="0" style="background:#080810;padding:40px 20px">
    <tr>
      <td align="center">
        <table width="560" cellpadding="0" cellspacing="0" style="background:#11111e;border-radius:16px;border:1px solid rgba(255,255,255,0.08);overflow:hidden;max-width:100%">

          <!-- Header -->
          <tr>
            <td style="padding:36px 40px 28px;border-bottom:1px solid rgba(255,255,255,0.06)">
              <span style="font-size:1.4rem;font-weight:800;color:#f0f0f8;letter-spacing:-0.03em">
                vibe<span style="color:#c6f135">code</span>
              </span>
            </td>
          </tr>

          <!-- Body -->
          <tr>
            <td style="padding:36px 40px">
              <p style="font-size:2rem;margin:0 0 8px;font-weight:800;color:#f0f0f8;letter-spacing:-0.03em;line-height:1.1">
                You're on the list. &#127881;
              </p>
              <p style="font-size:0.95rem;color:#c6f135;font-family:monospace;margin:0 0 24px;letter-spacing:0.05em;text-transform:uppercase">
                Beta Waitlist Confirmed
              </p>

              <p style="font-size:0.95rem;color:#9999b0;line-height:1.75;margin:0 0 16px;font-family:monospace">
                Hey, it's Ayo &mdash; I built VibeCode because I know what it feels like to want to learn to code and have no idea where to start. The tools are confusing. The assumed knowledge is real. The overwhelm is real.
              </p>
              <p style="font-size:0.95rem;color:#9999b0;line-height:1.75;margin:0 0 28px;font-family:monospace">
                VibeCode is the platform I wish existed when I started. No setup. No jargon. An AI that actually explains things. And a community where no question is too basic.
              </p>

              <!-- What's next box -->
              <table width="100%" cellpadding="0" cellspacing="0" style="background:rgba(198,241,53,0.05);border:1px solid rgba(198,241,53,0.15);border-radius:12px;margin-bottom:28px">
                <tr>
                  <td style="padding:20px 24px">
                    <p style="font-size:0.72rem;color:#c6f135;font-family:monospace;letter-spacing:0.12em;text-transform:uppercase;margin:0 0 12px">What happens next</p>
                    <p style="font-size:0.85rem;color:#9999b0;font-family:monospace;line-height:1.7;margin:0">
                      &rarr; You'll get early access before anyone else<br>
                      &rarr; First 500 signups get <strong style="color:#f0f0f8">Pro &mdash; free for life</strong><br>
                      &rarr; I'll personally email you when we're ready to let you in
                    </p>
                  </td>
                </tr>
              </table>

              <p style="font-size:0.85rem;color:#9999b0;line-height:1.7;font-family:monospace;margin:0 0 28px">
                In the meantime &mdash; if you know someone who's been putting off learning to code, forward this to them. The more people we can help, the better. &#128591;
              </p>

              <!-- CTA -->
              <table cellpadding="0" cellspacing="0">
                <tr>
                  <td style="background:#c6f135;border-radius:100px;padding:12px 28px">
                    <a href="https://vibecode.vercel.app" style="color:#080810;font-size:0.9rem;font-weight:800;text-decoration:none;display:block">
                      View the site &rarr;
                    </a>
                  </td>
                </tr>
              </table>
            </td>
          </tr>

          <!-- Footer -->
          <tr>
            <td style="padding:20px 40px;border-top:1px solid rgba(255,255,255,0.06)">
              <p style="font-size:0.72rem;color:#6b6b85;font-family:monospace;margin:0;line-height:1.6">
                You're receiving this because you signed up at vibecode.vercel.app.<br>
                Built by Ayo, with love. &mdash; <a href="#" style="color:#c6f135;text-decoration:none">Unsubscribe</a>
              </p>
            </td>
          </tr>

        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"##;

/// Build the welcome email for a recipient.
pub fn welcome_email(to: &str) -> EmailMessage {
    EmailMessage {
        from: FROM_ADDRESS.to_string(),
        to: to.to_string(),
        subject: SUBJECT.to_string(),
        html: WELCOME_HTML.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_email_addresses_the_recipient() {
        let message = welcome_email("user@example.com");
        assert_eq!(message.to, "user@example.com");
        assert_eq!(message.from, FROM_ADDRESS);
        assert_eq!(message.subject, SUBJECT);
        assert!(message.html.contains("You're on the list."));
    }
}
