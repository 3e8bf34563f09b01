use crate::landing::domain::model::value_objects::navigation_route::NavigationRoute;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketingAction {
    pub label: &'static str,
    pub route: NavigationRoute,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeatureHighlight {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

/// Welcome page shown when the request addressed no church.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketingContent {
    pub product_name: &'static str,
    pub tagline: &'static str,
    pub primary_actions: Vec<MarketingAction>,
    pub features: Vec<FeatureHighlight>,
    pub price_headline: &'static str,
    pub pricing_action: MarketingAction,
}

impl MarketingContent {
    pub fn church_saas() -> Self {
        Self {
            product_name: "ChurchSaaS",
            tagline: "Sistema completo de gestão para igrejas com recursos de membros, células, \
                      equipes de louvor e comunicação em tempo real.",
            primary_actions: vec![
                MarketingAction {
                    label: "Entrar",
                    route: NavigationRoute::sign_in(),
                },
                MarketingAction {
                    label: "Cadastrar Igreja",
                    route: NavigationRoute::register_church(),
                },
            ],
            features: vec![
                FeatureHighlight {
                    title: "Gestão de Membros",
                    description: "Cadastro completo de membros, histórico de participação e relatórios detalhados.",
                    accent: "blue",
                },
                FeatureHighlight {
                    title: "Células & Grupos",
                    description: "Organize células com mapa interativo, agende reuniões e acompanhe o crescimento.",
                    accent: "green",
                },
                FeatureHighlight {
                    title: "Louvor & Música",
                    description: "Gerencie equipes de louvor, repertórios e escalas com sugestões inteligentes.",
                    accent: "purple",
                },
                FeatureHighlight {
                    title: "Comunicação",
                    description: "Chat em tempo real, notificações push e integração com WhatsApp.",
                    accent: "orange",
                },
                FeatureHighlight {
                    title: "Financeiro",
                    description: "Cobrança automática por membro ativo com Pix, cartões e boletos.",
                    accent: "red",
                },
                FeatureHighlight {
                    title: "Conformidade LGPD",
                    description: "Totalmente adequado à Lei Geral de Proteção de Dados com controles de privacidade.",
                    accent: "teal",
                },
            ],
            price_headline: "A partir de R$ 1,00 por membro ativo",
            pricing_action: MarketingAction {
                label: "Ver Planos e Preços",
                route: NavigationRoute::pricing(),
            },
        }
    }
}
