use church_landing_api::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{request_host::RequestHost, subdomain::Subdomain},
};

use crate::support::{ROOT_DOMAIN, reserved_subdomains};

fn label_of(raw: &str) -> Option<String> {
    RequestHost::new(raw.to_string())
        .expect("valid host")
        .subdomain_label(ROOT_DOMAIN, &reserved_subdomains())
}

#[test]
fn request_host_strips_port_case_and_trailing_dot() {
    let host = RequestHost::new(" Acme.Igrejas.App.:8443 ".to_string()).expect("valid host");

    assert_eq!(host.value(), "acme.igrejas.app");
}

#[test]
fn request_host_keeps_ipv6_literal_without_port() {
    let host = RequestHost::new("[::1]:8081".to_string()).expect("valid host");

    assert_eq!(host.value(), "[::1]");
    assert_eq!(label_of("[::1]:8081"), None);
}

#[test]
fn request_host_rejects_blank_values() {
    assert!(matches!(
        RequestHost::new("   ".to_string()),
        Err(TenancyDomainError::InvalidHost)
    ));
    assert!(matches!(
        RequestHost::new(":8080".to_string()),
        Err(TenancyDomainError::InvalidHost)
    ));
}

#[test]
fn subdomain_label_is_leftmost_label_below_root_domain() {
    assert_eq!(label_of("acme.igrejas.app"), Some("acme".to_string()));
    assert_eq!(label_of("central.sp.igrejas.app"), Some("central".to_string()));
}

#[test]
fn root_reserved_and_foreign_hosts_have_no_subdomain() {
    assert_eq!(label_of("igrejas.app"), None);
    assert_eq!(label_of("www.igrejas.app"), None);
    assert_eq!(label_of("app.igrejas.app:443"), None);
    assert_eq!(label_of("example.org"), None);
    assert_eq!(label_of("notigrejas.app"), None);
    assert_eq!(label_of("127.0.0.1:8081"), None);
}

#[test]
fn subdomain_normalizes_and_validates_labels() {
    let subdomain = Subdomain::new(" ACME-Sul ".to_string()).expect("valid subdomain");
    assert_eq!(subdomain.value(), "acme-sul");

    for invalid in ["", "-acme", "acme-", "ac_me", "a.b"] {
        assert!(
            matches!(
                Subdomain::new(invalid.to_string()),
                Err(TenancyDomainError::InvalidSubdomain)
            ),
            "{invalid:?} should be rejected"
        );
    }
}
