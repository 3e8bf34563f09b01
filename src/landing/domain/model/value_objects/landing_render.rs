use crate::landing::domain::model::{
    enums::landing_view::LandingView, value_objects::navigation_route::NavigationRoute,
};

/// One render pass: what to show, plus the navigation it triggered, if any.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LandingRender {
    view: LandingView,
    navigation: Option<NavigationRoute>,
}

impl LandingRender {
    pub fn new(view: LandingView, navigation: Option<NavigationRoute>) -> Self {
        Self { view, navigation }
    }

    pub fn view(&self) -> &LandingView {
        &self.view
    }

    pub fn navigation(&self) -> Option<&NavigationRoute> {
        self.navigation.as_ref()
    }

    pub fn into_parts(self) -> (LandingView, Option<NavigationRoute>) {
        (self.view, self.navigation)
    }
}
