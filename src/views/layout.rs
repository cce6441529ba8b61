//! Page shell shared by every view: document head, language selector and
//! the support footer.

use crate::context::LanguageContext;
use crate::i18n::{LanguageRegistry, TranslationKey as K};

/// Escape text for use inside HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

const STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif;background:#f0fdf4;color:#111827}\
main{max-width:72rem;margin:0 auto;padding:1.5rem}\
.lang-selector{display:flex;gap:.5rem;align-items:center;justify-content:flex-end;padding:.75rem 1.5rem}\
.lang-option{border:1px solid #d1d5db;background:#fff;border-radius:.5rem;padding:.25rem .6rem;cursor:pointer}\
.lang-option.current{border-color:#16a34a;background:#dcfce7;font-weight:600}\
.role-card,.feature-card,.stat{background:#fff;border-radius:.75rem;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:1.25rem}\
.grid{display:grid;gap:1rem;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr))}\
.notice{background:#ecfdf5;border:1px solid #86efac;border-radius:.5rem;padding:.5rem .75rem}\
footer{background:#111827;color:#fff;padding:2rem 1.5rem}\
footer .grid{max-width:72rem;margin:0 auto}";

/// Wrap `body` in a complete HTML document.
///
/// `redirect` is the path the language selector returns to after a change.
pub fn page(context: &LanguageContext, title: &str, redirect: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 4096);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        context.language().code(),
        escape_html(title),
        STYLE
    ));
    html.push_str(&language_selector(context, redirect));
    html.push_str(body);
    html.push_str(&support_footer(context));
    html.push_str("</body>\n</html>\n");

    html
}

/// Form posting to `/language`, one button per supported language.
pub fn language_selector(context: &LanguageContext, redirect: &str) -> String {
    let current = context.language();
    let mut html = String::new();

    html.push_str("<form class=\"lang-selector\" method=\"post\" action=\"/language\">\n");
    html.push_str(&format!(
        "<span>{}</span>\n<input type=\"hidden\" name=\"redirect\" value=\"{}\">\n",
        escape_html(context.t(K::ChooseLanguage)),
        escape_html(redirect)
    ));

    for language in LanguageRegistry::get().list_all() {
        let marker = if language.code == current.code() {
            " current\" aria-current=\"true"
        } else {
            ""
        };
        html.push_str(&format!(
            "<button type=\"submit\" name=\"lang\" value=\"{}\" class=\"lang-option{}\" title=\"{}\">{} {}</button>\n",
            language.code,
            marker,
            escape_html(language.name),
            language.flag,
            escape_html(language.native_name)
        ));
    }

    html.push_str("</form>\n");
    html
}

/// Helpline columns plus the copyright lines.
pub fn support_footer(context: &LanguageContext) -> String {
    let t = |key| escape_html(context.t(key));

    format!(
        "<footer>\n<div class=\"grid\">\n\
         <section>\n<h3>🚨 {emergency}</h3>\n\
         <p>📞 {disease}: <strong>1800-123-4567</strong></p>\n\
         <p>🚑 {vet}: <strong>108</strong></p>\n\
         <p>{always}</p>\n</section>\n\
         <section>\n<h3>🛠️ {technical}</h3>\n\
         <p>📧 support@digitalfarm.gov.in</p>\n\
         <p>💬 {whatsapp}: <strong>+91-9876543210</strong></p>\n\
         <p>{hours}</p>\n</section>\n\
         <section>\n<h3>👨‍🌾 {farmer_helpline}</h3>\n\
         <p>📞 {helpline}: <strong>1551</strong></p>\n\
         <p>🌐 {training}: <strong>1800-HELP-FARM</strong></p>\n\
         <p>{free}</p>\n</section>\n\
         </div>\n<p class=\"copyright\">{copyright}<br>{ministry}</p>\n</footer>\n",
        emergency = t(K::EmergencySupport),
        disease = t(K::DiseaseAlert),
        vet = t(K::VeterinaryEmergency),
        always = t(K::Available247),
        technical = t(K::TechnicalSupport),
        whatsapp = t(K::Whatsapp),
        hours = t(K::MonSat),
        farmer_helpline = t(K::FarmerHelpline),
        helpline = t(K::Helpline),
        training = t(K::TrainingSupport),
        free = t(K::FreeServices),
        copyright = t(K::Copyright),
        ministry = t(K::Ministry),
    )
}
