#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedTenant {
    id: String,
    subdomain: String,
    display_name: String,
}

impl ResolvedTenant {
    pub fn new(id: String, subdomain: String, display_name: String) -> Self {
        Self {
            id,
            subdomain,
            display_name,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
