use super::layout::{escape_html, page};
use crate::context::LanguageContext;
use crate::i18n::TranslationKey as K;
use crate::login::{LoginForm, LoginMode, OTP_LENGTH};
use crate::role::Role;

/// Login page for `role` with the session's current form state.
pub fn render(role: Role, context: &LanguageContext, form: &LoginForm) -> String {
    let t = |key| escape_html(context.t(key));
    let action = format!("/login/{}", role.segment());
    let mut body = String::new();

    body.push_str(&format!(
        "<main class=\"login\">\n<a class=\"back\" href=\"/\">←</a>\n\
         <header style=\"background:{}\">\n<div class=\"icon\">{}</div>\n<h1>{}</h1>\n</header>\n",
        role.accent(),
        role.header_icon(),
        t(role.login_title_key())
    ));

    if let Some(notice) = form.notice() {
        body.push_str(&format!(
            "<p class=\"notice\" role=\"status\">{}</p>\n",
            t(notice.key())
        ));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}\">\n\
         <label for=\"username\">{}</label>\n\
         <input id=\"username\" name=\"username\" type=\"text\" placeholder=\"{}\" value=\"{}\" required>\n",
        action,
        t(K::Username),
        t(K::EnterUsername),
        escape_html(form.username())
    ));

    match form.mode() {
        LoginMode::Password => {
            body.push_str(&format!(
                "<label for=\"password\">{}</label>\n\
                 <input id=\"password\" name=\"password\" type=\"password\" placeholder=\"{}\" required>\n\
                 <button type=\"submit\" name=\"action\" value=\"submit\" class=\"primary\">{}</button>\n",
                t(K::Password),
                t(K::EnterPassword),
                t(K::Login)
            ));
            body.push_str(&format!(
                "<div class=\"links\">\n<a href=\"#\">{}</a>\n<a href=\"#\">{}</a>\n</div>\n",
                t(K::ForgotPassword),
                t(K::Help)
            ));
            if role.offers_otp() {
                body.push_str(&format!(
                    "<button type=\"submit\" name=\"action\" value=\"request_otp\" formnovalidate>{}</button>\n",
                    t(K::LoginWithOtp)
                ));
            }
        }
        LoginMode::Otp => {
            body.push_str(&format!(
                "<label for=\"otp\">{}</label>\n\
                 <input id=\"otp\" name=\"otp\" type=\"text\" inputmode=\"numeric\" maxlength=\"{}\" value=\"{}\" required>\n\
                 <button type=\"submit\" name=\"action\" value=\"submit\" class=\"primary\">{}</button>\n\
                 <button type=\"submit\" name=\"action\" value=\"use_password\" formnovalidate>{}</button>\n",
                t(K::EnterOtp),
                OTP_LENGTH,
                escape_html(form.otp()),
                t(K::VerifyOtp),
                t(K::BackToPassword)
            ));
        }
    }

    body.push_str("</form>\n");
    body.push_str(&format!(
        "<aside class=\"need-help\">\n<h4>{}</h4>\n\
         <p>📞 <strong>1800-123-4567</strong> - {}</p>\n\
         <p>🛠️ <strong>support@digitalfarm.gov.in</strong></p>\n\
         <p>👨‍🌾 <strong>1551</strong> - {}</p>\n</aside>\n</main>\n",
        t(K::NeedHelp),
        t(K::DiseaseAlert),
        t(K::Helpline)
    ));

    page(context, context.t(role.login_title_key()), &action, &body)
}
