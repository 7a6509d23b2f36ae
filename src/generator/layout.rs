use std::{fmt, str::FromStr};

use thiserror::Error;

/// Style block of the initial layout, with the key/value billing table.
pub const DETAILED_CSS: &str = r###"    * { margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      background-color: #f9f9f9;
    }
    .container {
      max-width: 600px;
      margin: 20px auto;
      background: #ffffff;
      border-radius: 8px;
      overflow: hidden;
      border: 1px solid #e8e8e8;
    }
    .header {
      background: #ffffff;
      padding: 30px 40px;
      text-align: center;
      border-bottom: 1px solid #e8e8e8;
    }
    .logo {
      max-width: 180px;
      height: auto;
      margin: 0 auto;
      display: block;
    }
    .content {
      padding: 40px;
    }
    .greeting {
      font-size: 16px;
      color: #333;
      margin-bottom: 20px;
      line-height: 1.6;
    }
    .greeting strong {
      color: #2c3e50;
    }
    .body-text {
      font-size: 14px;
      line-height: 1.7;
      color: #555;
      margin-bottom: 24px;
    }
    .info-box {
      background: #f5f5f5;
      border-left: 3px solid #3498db;
      padding: 16px;
      margin: 24px 0;
      border-radius: 4px;
      font-size: 14px;
      color: #555;
    }
    .info-box strong {
      color: #2c3e50;
    }
    .details {
      background: #fafafa;
      padding: 20px;
      border-radius: 4px;
      margin: 24px 0;
      border: 1px solid #e8e8e8;
    }
    .detail-row {
      display: flex;
      justify-content: space-between;
      padding: 10px 0;
      font-size: 14px;
      border-bottom: 1px solid #e8e8e8;
    }
    .detail-row:last-child {
      border-bottom: none;
    }
    .detail-label {
      color: #666;
      font-weight: 500;
    }
    .detail-value {
      color: #2c3e50;
      font-weight: 600;
      text-align: right;
    }
    .button-container {
      text-align: center;
      margin: 32px 0;
    }
    .button {
      display: inline-block;
      background: #3498db;
      color: white;
      padding: 12px 32px;
      text-decoration: none;
      border-radius: 4px;
      font-weight: 600;
      font-size: 15px;
      transition: background 0.2s;
    }
    .button:hover {
      background: #2980b9;
    }
    .section-title {
      font-size: 15px;
      font-weight: 600;
      color: #2c3e50;
      margin-top: 28px;
      margin-bottom: 16px;
      padding-bottom: 10px;
      border-bottom: 1px solid #e8e8e8;
    }
    .contact-info {
      background: #fafafa;
      padding: 16px;
      border-radius: 4px;
      margin: 20px 0;
      font-size: 14px;
      color: #555;
      border: 1px solid #e8e8e8;
    }
    .contact-info p {
      margin: 8px 0;
    }
    .contact-info strong {
      color: #2c3e50;
    }
    .divider {
      border: none;
      border-top: 1px solid #e8e8e8;
      margin: 28px 0;
    }
    .footer {
      background: #fafafa;
      padding: 24px 40px;
      text-align: center;
      font-size: 12px;
      color: #777;
      border-top: 1px solid #e8e8e8;
    }
    .footer-logo {
      max-width: 120px;
      height: auto;
      display: block;
      margin: 0 auto 12px;
    }
    .signature {
      font-size: 14px;
      line-height: 1.6;
      color: #555;
      margin: 28px 0;
    }
    .signature strong {
      color: #2c3e50;
    }
    @media only screen and (max-width: 600px) {
      .container { margin: 0; border-radius: 0; }
      .header, .content, .footer { padding: 20px; }
      .logo { max-width: 140px; }
      .detail-row { flex-direction: column; gap: 4px; }
      .detail-value { text-align: left; }
    }"###;

/// Style block of the revised layout, with the blue header and running prose.
pub const NARRATIVE_CSS: &str = r###"    * { margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      background-color: #f9f9f9;
    }
    .container {
      max-width: 600px;
      margin: 20px auto;
      background: #ffffff;
      border-radius: 8px;
      overflow: hidden;
      border: 1px solid #e8e8e8;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }
    .header {
      background: linear-gradient(135deg, #1e5ba8 0%, #2a7cbd 100%);
      padding: 40px 30px;
      text-align: center;
      border-bottom: none;
    }
    .logo {
      max-width: 200px;
      height: auto;
      margin: 0 auto;
      display: block;
    }
    .content {
      padding: 40px;
    }
    .greeting {
      font-size: 16px;
      color: #2c3e50;
      margin-bottom: 24px;
      line-height: 1.6;
      font-weight: 500;
    }
    .body-text {
      font-size: 14px;
      line-height: 1.8;
      color: #444;
      margin-bottom: 24px;
      text-align: justify;
    }
    .body-text strong {
      color: #1e5ba8;
      font-weight: 600;
    }
    .button-container {
      text-align: center;
      margin: 32px 0;
    }
    .button {
      display: inline-block;
      background: #1e5ba8;
      color: white;
      padding: 14px 36px;
      text-decoration: none;
      border-radius: 4px;
      font-weight: 600;
      font-size: 15px;
      transition: background 0.2s;
    }
    .button:hover {
      background: #164380;
    }
    .contact-section {
      margin-top: 32px;
      padding-top: 24px;
      border-top: 1px solid #e8e8e8;
    }
    .contact-label {
      font-size: 13px;
      color: #666;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.5px;
      margin-bottom: 12px;
    }
    .contact-info {
      font-size: 14px;
      color: #555;
      line-height: 1.8;
    }
    .contact-info p {
      margin: 6px 0;
    }
    .signature {
      font-size: 13px;
      line-height: 1.6;
      color: #666;
      margin-top: 32px;
      padding-top: 24px;
      border-top: 1px solid #e8e8e8;
    }
    .signature strong {
      color: #1e5ba8;
      display: block;
      margin-top: 8px;
      font-size: 14px;
    }
    .footer {
      background: #fafafa;
      padding: 24px 30px;
      text-align: center;
      font-size: 11px;
      color: #888;
      border-top: 1px solid #e8e8e8;
    }
    .footer p {
      margin: 4px 0;
    }
    .summary {
      font-size: 13px;
      line-height: 1.7;
      color: #555;
      background: #f5f8fc;
      border-left: 3px solid #1e5ba8;
      padding: 12px 16px;
      margin: 24px 0;
      border-radius: 4px;
    }
    @media only screen and (max-width: 600px) {
      .container { margin: 0; border-radius: 0; }
      .header, .content, .footer { padding: 20px; }
      .logo { max-width: 160px; }
      .body-text { text-align: left; }
    }"###;

/// Selects which skeleton and style block a document is assembled with.
///
/// `Detailed` lists the billing fields in a labeled table below the body, while
/// `Narrative` keeps them in running prose and only repeats them in a one-line
/// summary. Any body fragment can be rendered with either layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Detailed,
    Narrative,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Detailed, Layout::Narrative];

    /// Name of the raw Tera template holding this layout's skeleton.
    pub fn template_name(self) -> &'static str {
        match self {
            Layout::Detailed => "detailed",
            Layout::Narrative => "narrative",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Layout::Detailed => DETAILED_CSS,
            Layout::Narrative => NARRATIVE_CSS,
        }
    }

    /// Content-ID the mailer must attach the logo under.
    pub fn logo_cid(self) -> &'static str {
        match self {
            Layout::Detailed => "cid:logo-company",
            Layout::Narrative => "cid:logo-proteq",
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Narrative
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown layout `{0}`, expected `detailed` or `narrative`")]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" | "initial" => Ok(Layout::Detailed),
            "narrative" | "revised" => Ok(Layout::Narrative),
            _ => Err(UnknownLayout(s.to_string())),
        }
    }
}
