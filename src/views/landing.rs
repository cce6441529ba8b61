use super::layout::{escape_html, page};
use crate::context::LanguageContext;
use crate::i18n::TranslationKey as K;
use crate::role::Role;

/// Role selection page. Each card is a plain link to the role's login view.
pub fn render(context: &LanguageContext) -> String {
    let t = |key| escape_html(context.t(key));
    let mut body = String::new();

    body.push_str(&format!(
        "<main>\n<header class=\"hero\">\n<h1>🌾 {}</h1>\n<p>{}</p>\n</header>\n\
         <h2>{}</h2>\n<p>{}</p>\n<div class=\"grid roles\">\n",
        t(K::Title),
        t(K::Subtitle),
        t(K::SelectRole),
        t(K::Welcome)
    ));

    for role in Role::ALL {
        body.push_str(&format!(
            "<a class=\"role-card\" href=\"/login/{}\" style=\"border-top:4px solid {}\">\n\
             <div class=\"icon\">{}</div>\n<h3>{}</h3>\n<p>{}</p>\n</a>\n",
            role.segment(),
            role.accent(),
            role.card_icon(),
            t(role.title_key()),
            t(role.description_key())
        ));
    }

    body.push_str("</div>\n</main>\n");

    page(context, context.t(K::Title), "/", &body)
}
