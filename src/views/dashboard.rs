use super::layout::{escape_html, page};
use crate::context::LanguageContext;
use crate::dashboard::DashboardConfig;
use crate::i18n::TranslationKey as K;

pub fn render(config: &DashboardConfig, context: &LanguageContext) -> String {
    let t = |key| escape_html(context.t(key));
    let role = config.role;
    let mut body = String::new();

    body.push_str(&format!(
        "<header class=\"dashboard-header\" style=\"background:{}\">\n\
         <div class=\"icon\">{}</div>\n<div>\n<h1>{}</h1>\n<p>{}</p>\n</div>\n\
         <a class=\"logout\" href=\"/logout\">{}</a>\n</header>\n<main>\n",
        role.accent(),
        role.header_icon(),
        escape_html(config.title),
        t(K::WelcomeBack),
        t(K::Logout)
    ));

    body.push_str(&format!(
        "<section class=\"overview\">\n<h2>{}</h2>\n<p>{}</p>\n</section>\n<div class=\"grid features\">\n",
        t(K::DashboardOverview),
        escape_html(config.overview)
    ));

    for feature in &config.features {
        body.push_str(&format!(
            "<div class=\"feature-card\">\n<div class=\"icon\">{}</div>\n<h3>{}</h3>\n<p>{}</p>\n</div>\n",
            feature.icon,
            escape_html(feature.title),
            escape_html(feature.description)
        ));
    }

    body.push_str(&format!(
        "</div>\n<section class=\"quick-stats\">\n<h3>{}</h3>\n<div class=\"grid\">\n",
        t(K::QuickStats)
    ));

    for stat in &config.stats {
        body.push_str(&format!(
            "<div class=\"stat\">\n<div class=\"stat-value\" style=\"color:{}\">{}</div>\n\
             <div class=\"stat-label\">{}</div>\n</div>\n",
            stat.tone.color(),
            escape_html(&stat.value),
            escape_html(stat.label)
        ));
    }

    body.push_str("</div>\n</section>\n</main>\n");

    let redirect = format!("/dashboard/{}", role.segment());
    page(context, config.title, &redirect, &body)
}
