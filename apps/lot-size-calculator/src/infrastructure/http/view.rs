//! Server-rendered calculator page.

use std::fmt::Write as _;

use crate::application::dto::{CalculateLotSizeRequestDto, CalculationResultDto, fields};

/// The calculator form, optionally with a result or an error.
#[derive(Debug, Clone, Default)]
pub struct CalculatorPage {
    /// Values to echo back into the inputs.
    pub request: CalculateLotSizeRequestDto,
    /// Calculation result, shown under the form.
    pub result: Option<CalculationResultDto>,
    /// Validation message, shown under the form.
    pub error: Option<String>,
}

impl CalculatorPage {
    /// Empty form.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form echoing `request` with its result.
    #[must_use]
    pub const fn with_result(request: CalculateLotSizeRequestDto, result: CalculationResultDto) -> Self {
        Self {
            request,
            result: Some(result),
            error: None,
        }
    }

    /// Form echoing `request` with a validation message.
    #[must_use]
    pub fn with_error(request: CalculateLotSizeRequestDto, error: impl Into<String>) -> Self {
        Self {
            request,
            result: None,
            error: Some(error.into()),
        }
    }

    /// Render the full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(2048);
        html.push_str(concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "  <title>Lot Size Calculator</title>\n",
            "  <link rel=\"stylesheet\" href=\"/styles.css\">\n",
            "</head>\n",
            "<body>\n",
            "  <main>\n",
            "    <h1>Lot Size Calculator</h1>\n",
            "    <form method=\"post\" action=\"/calculateLotSize\">\n",
        ));

        self.text_input(&mut html, fields::ENTRY_PRICE, "Entry price");
        self.text_input(&mut html, fields::STOP_LOSS_PRICE, "Stop-loss price");
        self.text_input(&mut html, fields::ACCOUNT_BALANCE, "Account balance");
        self.text_input(&mut html, fields::RISK_PERCENTAGE, "Risk (%)");

        let checked = if self.request.is_gold_or_jpy() { " checked" } else { "" };
        let _ = writeln!(
            html,
            "      <label class=\"checkbox\"><input type=\"checkbox\" id=\"{name}\" name=\"{name}\"{checked}> Gold or JPY pair</label>",
            name = fields::GOLD_OR_JPY_PAIR,
        );

        html.push_str("      <button type=\"submit\">Calculate</button>\n    </form>\n");

        if let Some(error) = &self.error {
            let _ = writeln!(
                html,
                "    <p class=\"error\" role=\"alert\">{}</p>",
                escape_html(error)
            );
        }

        if let Some(result) = &self.result {
            let _ = writeln!(
                html,
                concat!(
                    "    <section class=\"result\">\n",
                    "      <p>Recommended lot size: <strong id=\"recommendedLotSize\">{}</strong></p>\n",
                    "      <p>Pips at risk: <strong id=\"pipsIfLoose\">{}</strong></p>\n",
                    "    </section>",
                ),
                escape_html(&result.recommended_lot_size),
                escape_html(&result.pips_if_loose),
            );
        }

        html.push_str("  </main>\n</body>\n</html>\n");
        html
    }

    fn text_input(&self, html: &mut String, name: &str, label: &str) {
        let _ = writeln!(
            html,
            "      <label for=\"{name}\">{label}</label>\n      <input type=\"text\" inputmode=\"decimal\" id=\"{name}\" name=\"{name}\" value=\"{value}\">",
            value = escape_html(&self.request.field_text(name)),
        );
    }
}

/// Escape text for HTML element content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_form_and_no_result() {
        let html = CalculatorPage::empty().render();

        assert!(html.contains(r#"<form method="post" action="/calculateLotSize">"#));
        assert!(html.contains(r#"name="riskPercentageUWantToRisk" value="""#));
        assert!(!html.contains("checked"));
        assert!(!html.contains("Recommended lot size"));
    }

    #[test]
    fn result_page_echoes_inputs() {
        let request = CalculateLotSizeRequestDto::from_text("2000.00", "1999.50", "5000", "2", true);
        let result = CalculationResultDto {
            recommended_lot_size: "0.20".to_string(),
            pips_if_loose: "50.00".to_string(),
        };
        let html = CalculatorPage::with_result(request, result).render();

        assert!(html.contains(r#"name="entryPrice" value="2000.00""#));
        assert!(html.contains(r#"name="goldOrJPYPair" checked"#));
        assert!(html.contains(r#"<strong id="recommendedLotSize">0.20</strong>"#));
        assert!(html.contains(r#"<strong id="pipsIfLoose">50.00</strong>"#));
    }

    #[test]
    fn error_page_escapes_input() {
        let request =
            CalculateLotSizeRequestDto::from_text("\"><script>", "1", "1", "1", false);
        let html = CalculatorPage::with_error(request, "Invalid number for 'entryPrice': \"<x>\"").render();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains(r#"<p class="error" role="alert">"#));
        assert!(!html.contains("<x>"));
    }

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("1.1050"), "1.1050");
    }
}
