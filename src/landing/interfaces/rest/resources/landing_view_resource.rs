use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::landing::domain::model::{
    enums::landing_view::LandingView,
    value_objects::marketing_content::{MarketingAction, MarketingContent},
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LandingActionResource {
    pub label: String,
    pub route: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LandingFeatureResource {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LandingTenantResource {
    pub id: String,
    pub subdomain: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LandingViewResource {
    /// One of `loading`, `error`, `redirecting`, `welcome`, `tenant_not_found`.
    pub view: String,
    pub message: Option<String>,
    pub subdomain: Option<String>,
    pub tenant: Option<LandingTenantResource>,
    pub actions: Vec<LandingActionResource>,
    pub features: Vec<LandingFeatureResource>,
}

impl From<&LandingView> for LandingViewResource {
    fn from(view: &LandingView) -> Self {
        let mut resource = LandingViewResource {
            view: view.name().to_string(),
            message: None,
            subdomain: None,
            tenant: None,
            actions: Vec::new(),
            features: Vec::new(),
        };

        match view {
            LandingView::Loading => {}
            LandingView::ResolutionError {
                message,
                retry_route,
            } => {
                resource.message = Some(message.clone());
                resource.actions.push(LandingActionResource {
                    label: "Tentar Novamente".to_string(),
                    route: retry_route.value().to_string(),
                });
            }
            LandingView::Redirecting { tenant, target } => {
                resource.subdomain = Some(tenant.subdomain().to_string());
                resource.tenant = Some(LandingTenantResource {
                    id: tenant.id().to_string(),
                    subdomain: tenant.subdomain().to_string(),
                    display_name: tenant.display_name().to_string(),
                });
                resource.actions.push(LandingActionResource {
                    label: "Ir para o painel".to_string(),
                    route: target.value().to_string(),
                });
            }
            LandingView::Welcome(content) => {
                resource.message = Some(content.tagline.to_string());
                resource.actions = marketing_actions(content);
                resource.features = content
                    .features
                    .iter()
                    .map(|feature| LandingFeatureResource {
                        title: feature.title.to_string(),
                        description: feature.description.to_string(),
                    })
                    .collect();
            }
            LandingView::TenantNotFound {
                subdomain,
                home_route,
            } => {
                resource.subdomain = Some(subdomain.clone());
                resource.actions.push(LandingActionResource {
                    label: "Voltar ao Início".to_string(),
                    route: home_route.value().to_string(),
                });
            }
        }

        resource
    }
}

fn marketing_actions(content: &MarketingContent) -> Vec<LandingActionResource> {
    content
        .primary_actions
        .iter()
        .chain(std::iter::once(&content.pricing_action))
        .map(|action: &MarketingAction| LandingActionResource {
            label: action.label.to_string(),
            route: action.route.value().to_string(),
        })
        .collect()
}
