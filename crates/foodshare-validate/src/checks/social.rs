//! Social network link inputs.

use foodshare_model::{OTHER_NETWORK, SocialNetworkInput, is_other_network};
use url::Url;

use super::CheckResult;
use crate::issue::Issue;

/// Check the URL typed for one network.
///
/// The host must contain `<network>.com` unless the network is the
/// catch-all one.
pub fn check_social_network(input: &SocialNetworkInput) -> CheckResult {
    let network = input.network.as_str();
    if input.url.is_empty() {
        return Err(Issue::UrlMissing);
    }
    let Ok(url) = Url::parse(&input.url) else {
        return Err(Issue::UrlInvalid {
            network: network.to_string(),
        });
    };
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Issue::UrlScheme {
            scheme: url.scheme().to_string(),
        });
    }
    let host = url.host_str().unwrap_or_default();
    if !is_other_network(network) && !host.contains(&format!("{network}.com")) {
        return Err(Issue::UrlHost {
            network: network.to_string(),
            host: host.to_string(),
        });
    }
    if matches!(url.path(), "" | "/") {
        return Err(Issue::UrlPath {
            network: network.to_string(),
        });
    }
    Ok(())
}

/// Check every input, then reject a link whose host resolves to a network
/// an earlier valid link already claimed.
pub fn check_social_networks(
    inputs: &[SocialNetworkInput],
    allowed: &[String],
) -> Vec<CheckResult> {
    let mut claimed: Vec<&str> = Vec::new();
    inputs
        .iter()
        .map(|input| {
            check_social_network(input)?;
            let resolved = Url::parse(&input.url)
                .ok()
                .and_then(|url| url.host_str().and_then(|host| resolve_network(host, allowed)));
            if let Some(network) = resolved {
                if claimed.contains(&network) {
                    return Err(Issue::NetworkRepeated {
                        network: network.to_string(),
                    });
                }
                claimed.push(network);
            }
            Ok(())
        })
        .collect()
}

/// Network a hostname belongs to.
///
/// The first allowed network whose name occurs in the host wins. Any other
/// host that looks like a domain (an inner dot, at least four characters)
/// resolves to the catch-all network.
pub fn resolve_network<'a>(hostname: &str, allowed: &'a [String]) -> Option<&'a str> {
    if hostname.is_empty() {
        return None;
    }
    if let Some(network) = allowed
        .iter()
        .filter(|network| !is_other_network(network))
        .find(|network| hostname.contains(network.as_str()))
    {
        return Some(network.as_str());
    }

    let chars: Vec<char> = hostname.chars().collect();
    let inner_dot = chars.len() > 2 && chars[1..chars.len() - 1].contains(&'.');
    (inner_dot && chars.len() >= 4).then_some(OTHER_NETWORK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(network: &str, url: &str) -> SocialNetworkInput {
        SocialNetworkInput::new(network, url)
    }

    fn allowed() -> Vec<String> {
        ["facebook", "instagram", "tiktok", "twitter", "otra"]
            .map(String::from)
            .to_vec()
    }

    #[test]
    fn url_checks_in_order() {
        assert_eq!(
            check_social_network(&input("facebook", "")),
            Err(Issue::UrlMissing)
        );
        assert!(matches!(
            check_social_network(&input("facebook", "https://")),
            Err(Issue::UrlInvalid { .. })
        ));
        assert!(matches!(
            check_social_network(&input("facebook", "ftp://facebook.com/user")),
            Err(Issue::UrlScheme { .. })
        ));
        assert!(matches!(
            check_social_network(&input("facebook", "https://twitter.com/user")),
            Err(Issue::UrlHost { .. })
        ));
        assert!(matches!(
            check_social_network(&input("facebook", "https://www.facebook.com/")),
            Err(Issue::UrlPath { .. })
        ));
        assert_eq!(
            check_social_network(&input("facebook", "https://facebook.com/user")),
            Ok(())
        );
    }

    #[test]
    fn other_network_skips_host_check() {
        assert_eq!(
            check_social_network(&input("otra", "https://mastodon.social/@user")),
            Ok(())
        );
        assert!(check_social_network(&input("otra", "https://other.com/")).is_err());
    }

    #[test]
    fn resolves_hosts() {
        let allowed = allowed();
        assert_eq!(resolve_network("www.instagram.com", &allowed), Some("instagram"));
        assert_eq!(resolve_network("mastodon.social", &allowed), Some("otra"));
        assert_eq!(resolve_network("localhost", &allowed), None);
        assert_eq!(resolve_network("a.b", &allowed), None);
        assert_eq!(resolve_network("", &allowed), None);
    }

    #[test]
    fn one_link_per_network() {
        let verdicts = check_social_networks(
            &[
                input("facebook", "https://facebook.com/junta"),
                input("otra", "https://m.facebook.com/otra-pagina"),
                input("instagram", "https://instagram.com/junta"),
            ],
            &allowed(),
        );
        assert_eq!(verdicts[0], Ok(()));
        assert_eq!(
            verdicts[1],
            Err(Issue::NetworkRepeated {
                network: "facebook".into()
            })
        );
        assert_eq!(verdicts[2], Ok(()));
    }
}
