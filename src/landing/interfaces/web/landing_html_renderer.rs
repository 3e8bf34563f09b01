use std::fmt::Write;

use crate::{
    landing::domain::model::{
        enums::landing_view::LandingView,
        value_objects::{
            marketing_content::{MarketingAction, MarketingContent},
            navigation_route::NavigationRoute,
        },
    },
    shared::interfaces::rest::html::escape_html,
};

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#111827}\
.screen{min-height:100vh;display:flex;align-items:center;justify-content:center}\
.calm{background:linear-gradient(135deg,#eff6ff,#e0e7ff)}\
.alarm{background:linear-gradient(135deg,#fef2f2,#fce7f3)}\
.card{background:#fff;border-radius:12px;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:24px}\
.panel{width:24rem}\
.title-error{color:#dc2626}\
.button{display:inline-block;padding:10px 18px;border-radius:8px;border:1px solid #d1d5db;\
color:#111827;text-decoration:none}\
.button.primary{background:#111827;color:#fff;border-color:#111827}\
.wide{display:block;text-align:center}\
.hero{text-align:center;padding:64px 16px}\
.features{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:32px;\
max-width:72rem;margin:0 auto;padding:0 16px}\
.feature{text-align:center}\
.accent{width:64px;height:64px;border-radius:50%;margin:0 auto 16px}\
.pricing{text-align:center;padding:64px 16px}";

/// Full HTML document for a landing view.
pub fn landing_page_html(view: &LandingView) -> String {
    let (title, body) = match view {
        LandingView::Loading => (
            "Carregando...",
            panel(
                "calm",
                "<p role=\"status\" aria-busy=\"true\">Carregando...</p>",
            ),
        ),
        LandingView::ResolutionError {
            message,
            retry_route,
        } => (
            "Erro",
            panel(
                "alarm",
                &format!(
                    "<h1 class=\"title-error\">Erro</h1><p>{}</p>{}",
                    escape_html(message),
                    wide_link(retry_route, "Tentar Novamente")
                ),
            ),
        ),
        LandingView::Redirecting { tenant, target } => (
            "Redirecionando...",
            panel(
                "calm",
                &format!(
                    "<p>Abrindo {}...</p>{}",
                    escape_html(tenant.display_name()),
                    wide_link(target, "Ir para o painel")
                ),
            ),
        ),
        LandingView::Welcome(content) => (content.product_name, welcome(content)),
        LandingView::TenantNotFound {
            subdomain,
            home_route,
        } => (
            "Igreja não encontrada",
            panel(
                "alarm",
                &format!(
                    "<h1 class=\"title-error\">Igreja não encontrada</h1>\
                     <p>Não foi possível encontrar uma igreja com o endereço &quot;{}&quot;.</p>{}",
                    escape_html(subdomain),
                    wide_link(home_route, "Voltar ao Início")
                ),
            ),
        ),
    };

    format!(
        "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title><style>{STYLESHEET}</style></head>\
         <body data-view=\"{}\">{body}</body></html>",
        escape_html(title),
        view.name()
    )
}

fn panel(tone: &str, inner: &str) -> String {
    format!("<main class=\"screen {tone}\"><section class=\"card panel\">{inner}</section></main>")
}

fn wide_link(route: &NavigationRoute, label: &str) -> String {
    format!(
        "<a class=\"button wide\" href=\"{}\">{}</a>",
        escape_html(route.value()),
        escape_html(label)
    )
}

fn action_link(action: &MarketingAction, primary: bool) -> String {
    format!(
        "<a class=\"button{}\" href=\"{}\">{}</a>",
        if primary { " primary" } else { "" },
        escape_html(action.route.value()),
        escape_html(action.label)
    )
}

fn welcome(content: &MarketingContent) -> String {
    let mut html = String::from("<main class=\"calm\">");

    let _ = write!(
        html,
        "<header class=\"hero\"><h1>{}</h1><p>{}</p><nav>",
        escape_html(content.product_name),
        escape_html(content.tagline)
    );
    for (index, action) in content.primary_actions.iter().enumerate() {
        html.push_str(&action_link(action, index == 0));
        html.push(' ');
    }
    html.push_str("</nav></header><section class=\"features\">");

    for feature in &content.features {
        let _ = write!(
            html,
            "<article class=\"card feature\"><div class=\"accent\" data-accent=\"{}\"></div>\
             <h2>{}</h2><p>{}</p></article>",
            escape_html(feature.accent),
            escape_html(feature.title),
            escape_html(feature.description)
        );
    }

    let _ = write!(
        html,
        "</section><footer class=\"pricing\"><p>{}</p>{}</footer></main>",
        escape_html(content.price_headline),
        action_link(&content.pricing_action, false)
    );

    html
}
